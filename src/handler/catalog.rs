//! Constant catalogs for the random-pick routes
//!
//! Both lists live for the whole process and are never mutated, so they are
//! safely shared across concurrently handled requests.

use rand::Rng;

/// Magic 8-Ball answers.
pub const FORTUNES: [&str; 20] = [
    "It is certain.",
    "It is decidedly so.",
    "Without a doubt.",
    "Yes - definitely.",
    "You may rely on it",
    "As I see it, yes.",
    "Most likely",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

/// Apple product names.
pub const PRODUCTS: [&str; 50] = [
    "iPhone",
    "iPhone 3G",
    "iPhone 3GS",
    "iPhone 4",
    "iPhone 4S",
    "iPhone 5",
    "iPhone 5C",
    "iPhone 5S",
    "iPhone 6",
    "iPhone 6 Plus",
    "iPhone 6S",
    "iPhone 6S Plus",
    "iPhone SE",
    "iPhone 7",
    "iPhone 7 Plus",
    "iPhone 8",
    "iPhone 8 Plus",
    "iPhone X",
    "iPhone Xs",
    "iPhone Xs Max",
    "iPhone X\u{280}",
    "iPhone 11",
    "iPhone 11 Pro",
    "iPhone 11 Pro Max",
    "iPad",
    "iPad 2",
    "iPad 3",
    "iPad 4",
    "iPad 5",
    "iPad 6",
    "iPad Air",
    "iPad Air 2",
    "iPad Air 3",
    "iPad Mini",
    "iPad Mini 2",
    "iPad Mini 3",
    "iPad Mini 4",
    "iPad Mini 5",
    "iPad Pro 9.7-inch",
    "iPad Pro 10.5-inch",
    "iPad Pro 11-inch",
    "iPad Pro 12.9-inch",
    "iPad Pro 12.9-inch 2",
    "iPad Pro 12.9-inch 3",
    "Apple Watch",
    "Apple Watch Series 1",
    "Apple Watch Series 2",
    "Apple Watch Series 3",
    "Apple Watch Series 4",
    "Apple Watch Series 5",
];

/// Uniform random index over `[0, len)`. No seeding contract; draws are
/// independent per call.
pub fn random_index(len: usize) -> usize {
    rand::thread_rng().gen_range(0..len)
}

/// Pick one fortune at random.
pub fn pick_fortune() -> &'static str {
    FORTUNES[random_index(FORTUNES.len())]
}

/// Pick one product at random.
pub fn pick_product() -> &'static str {
    PRODUCTS[random_index(PRODUCTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(FORTUNES.len(), 20);
        assert_eq!(PRODUCTS.len(), 50);
    }

    #[test]
    fn test_random_index_stays_in_bounds() {
        for _ in 0..10_000 {
            assert!(random_index(7) < 7);
        }
    }

    #[test]
    fn test_pick_fortune_is_a_member() {
        for _ in 0..100 {
            assert!(FORTUNES.contains(&pick_fortune()));
        }
    }

    #[test]
    fn test_pick_product_is_a_member() {
        for _ in 0..100 {
            assert!(PRODUCTS.contains(&pick_product()));
        }
    }

    // Coarse uniformity check: with this many draws the chance of any
    // entry never appearing is negligible.
    #[test]
    fn test_every_product_is_eventually_picked() {
        let seen: HashSet<&str> = (0..10_000).map(|_| pick_product()).collect();
        assert_eq!(seen.len(), PRODUCTS.len());
    }

    #[test]
    fn test_every_fortune_is_eventually_picked() {
        let seen: HashSet<&str> = (0..5_000).map(|_| pick_fortune()).collect();
        assert_eq!(seen.len(), FORTUNES.len());
    }
}
