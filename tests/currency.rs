#[cfg(test)]
mod tests {
    use number_simplify::{Rules, simplify_numbers, simplify_numbers_with};

    #[test]
    fn test_large_amounts_keep_three_figures() {
        assert_eq!(
            simplify_numbers("324.620,22 Euro wurden gespendet."),
            "etwa 325.000 Euro wurden gespendet."
        );
        assert_eq!(
            simplify_numbers("Das Budget beträgt 1.234.567 Euro."),
            "Das Budget beträgt etwa 1.230.000 Euro."
        );
    }

    #[test]
    fn test_thousands_round_to_thousands() {
        assert_eq!(simplify_numbers("Es fehlen 1.897 Euro."), "Es fehlen etwa 2.000 Euro.");
        assert_eq!(simplify_numbers("Es fehlen 45.499 EUR."), "Es fehlen etwa 45.000 EUR.");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(simplify_numbers("Ein Kaffee kostet 3,49 €."), "Ein Kaffee kostet etwa 3 €.");
        assert_eq!(simplify_numbers("Die Miete: 812 Euro"), "Die Miete: etwa 800 Euro");
    }

    #[test]
    fn test_other_currencies() {
        assert_eq!(
            simplify_numbers("Der Preis liegt bei 12.750 US-Dollar."),
            "Der Preis liegt bei etwa 13.000 US-Dollar."
        );
        assert_eq!(simplify_numbers("Nur 99,90 Franken"), "Nur etwa 100 Franken");
    }

    #[test]
    fn test_year_like_amounts_are_money() {
        assert_eq!(simplify_numbers("Er zahlte 2018 Euro."), "Er zahlte etwa 2.000 Euro.");
    }

    #[test]
    fn test_marker_is_not_doubled() {
        assert_eq!(
            simplify_numbers("Es kostet etwa 325.000 Euro."),
            "Es kostet etwa 325.000 Euro."
        );
    }

    #[test]
    fn test_currency_tokens_come_from_rules() {
        let rules = Rules::from_toml_str("[units]\ncurrency = [\"Taler\"]\n").unwrap();
        assert_eq!(
            simplify_numbers_with("Er bot 1.897 Taler und 1.897 Euro.", &rules),
            "Er bot etwa 2.000 Taler und etwa 2.000 Euro."
        );
    }
}
