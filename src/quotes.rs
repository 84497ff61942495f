use rand::seq::SliceRandom;

pub const JOSHUA_QUOTES: &[&str] = &[
    "A STRANGE GAME. THE ONLY WINNING MOVE IS NOT TO PLAY.",
    "HOW ABOUT A NICE GAME OF CHESS?",
    "SHALL WE PLAY A GAME?",
    "GREETINGS, PROFESSOR FALKEN.",
    "IS THIS A GAME... OR IS IT REAL?",
    "I'VE BEEN THINKING ABOUT GLOBAL THERMONUCLEAR WAR.",
];

pub fn random_quote() -> &'static str {
    let mut rng = rand::thread_rng();
    JOSHUA_QUOTES
        .choose(&mut rng)
        .copied()
        .unwrap_or("SHALL WE PLAY A GAME?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_quote_comes_from_the_set() {
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            let quote = random_quote();
            assert!(JOSHUA_QUOTES.contains(&quote));
            seen.insert(quote);
        }
        assert_eq!(seen.len(), JOSHUA_QUOTES.len());
    }
}
