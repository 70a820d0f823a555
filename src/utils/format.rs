/// Display name derived from the two name fields.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name).trim().to_string()
}

/// Drops every non-digit and groups the rest in threes from the right,
/// e.g. `"1000000"` becomes `"1 000 000"`. Already grouped input comes back unchanged.
pub fn group_salary(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::is_grouped_salary;

    #[test]
    fn full_name_is_trimmed_join() {
        assert_eq!(full_name("Ada", "Lovelace"), "Ada Lovelace");
        assert_eq!(full_name("Ada", ""), "Ada");
        assert_eq!(full_name("", "Lovelace"), "Lovelace");
        assert_eq!(full_name("", ""), "");
        assert_eq!(full_name("Mary Ann", "Evans"), "Mary Ann Evans");
    }

    #[test]
    fn groups_salary_digits() {
        assert_eq!(group_salary("1000000"), "1 000 000");
        assert_eq!(group_salary("7"), "7");
        assert_eq!(group_salary("12ab34"), "1 234");
        assert_eq!(group_salary("123"), "123");
        assert_eq!(group_salary("1234"), "1 234");
        assert_eq!(group_salary("12345"), "12 345");
        assert_eq!(group_salary("$ 1,200,000.-"), "1 200 000");
        assert_eq!(group_salary("abc"), "");
        assert_eq!(group_salary(""), "");
    }

    #[test]
    fn grouping_is_idempotent_and_well_formed() {
        for raw in ["1", "12", "123", "1234", "999999", "1000000", "0001000", "98765432101"] {
            let once = group_salary(raw);
            assert_eq!(group_salary(&once), once, "reformatting {raw}");
            assert!(is_grouped_salary(&once), "{once} should match the grouped format");
        }
    }
}
