// Field validation for registration and login payloads.
//
// Every rule appends its message and keeps going, so one response carries
// everything wrong with a payload. `None` means the field was absent on the
// wire; absent fields fail only the "nao pode ser vazio" rule.
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email regex is valid")
    })
}

pub fn validate_name(value: Option<&str>, errors: &mut Vec<String>) {
    match value {
        None => errors.push("Nome nao pode ser vazio".to_string()),
        Some(v) => {
            if v.is_empty() {
                errors.push("Nome nao pode ser vazio".to_string());
            }
            if v.chars().count() < 3 || v.chars().count() > 200 {
                errors.push("Nome deve conter entre 3 e 200 caracteres".to_string());
            }
        }
    }
}

pub fn validate_email(value: Option<&str>, errors: &mut Vec<String>) {
    match value {
        None => errors.push("Email nao pode ser vazio".to_string()),
        Some(v) => {
            if v.is_empty() {
                errors.push("Email nao pode ser vazio".to_string());
            }
            if v.chars().count() < 5 || v.chars().count() > 200 {
                errors.push("Email deve conter entre 5 e 200 caracteres".to_string());
            }
            if !v.is_empty() && !is_valid_email(v) {
                errors.push("Email invalido".to_string());
            }
        }
    }
}

pub fn validate_password(value: Option<&str>, errors: &mut Vec<String>) {
    if value.map_or(true, |v| v.is_empty()) {
        errors.push("Senha nao pode ser vazia".to_string());
    }
}

pub fn validate_cpf(value: Option<&str>, errors: &mut Vec<String>) {
    match value {
        None => errors.push("CPF nao pode ser vazio".to_string()),
        Some(v) => {
            if v.is_empty() {
                errors.push("CPF nao pode ser vazio".to_string());
            }
            if !is_valid_cpf(v) {
                errors.push("CPF invalido".to_string());
            }
        }
    }
}

pub fn validate_cnpj(value: Option<&str>, errors: &mut Vec<String>) {
    match value {
        None => errors.push("CNPJ nao pode ser vazio".to_string()),
        Some(v) => {
            if v.is_empty() {
                errors.push("CNPJ nao pode ser vazio".to_string());
            }
            if !is_valid_cnpj(v) {
                errors.push("CNPJ invalido".to_string());
            }
        }
    }
}

pub fn validate_corporate_name(value: Option<&str>, errors: &mut Vec<String>) {
    match value {
        None => errors.push("Razao social nao pode ser vazia".to_string()),
        Some(v) => {
            if v.is_empty() {
                errors.push("Razao social nao pode ser vazia".to_string());
            }
            if v.chars().count() < 5 || v.chars().count() > 200 {
                errors.push("Razao social deve conter entre 5 e 200 caracteres".to_string());
            }
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Optional monetary field sent as a string. Absent stays absent; a present
/// but unparseable value is reported, never silently dropped.
pub fn parse_hourly_rate(value: Option<&str>, errors: &mut Vec<String>) -> Option<Decimal> {
    let v = value?;
    match v.parse::<Decimal>() {
        Ok(rate) => Some(rate),
        Err(_) => {
            errors.push("Valor da hora invalido".to_string());
            None
        }
    }
}

pub fn parse_daily_work_hours(value: Option<&str>, errors: &mut Vec<String>) -> Option<f32> {
    parse_hours(value, "Quantidade de horas de trabalho invalida", errors)
}

pub fn parse_lunch_hours(value: Option<&str>, errors: &mut Vec<String>) -> Option<f32> {
    parse_hours(value, "Quantidade de horas de almoco invalida", errors)
}

fn parse_hours(value: Option<&str>, message: &str, errors: &mut Vec<String>) -> Option<f32> {
    let v = value?;
    match v.parse::<f32>() {
        Ok(hours) if hours.is_finite() => Some(hours),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

/// CPF check: eleven digits (separators tolerated), not all equal, both
/// verification digits consistent with the mod-11 scheme.
pub fn is_valid_cpf(value: &str) -> bool {
    let digits = match extract_digits(value, 11) {
        Some(d) => d,
        None => return false,
    };
    if all_equal(&digits) {
        return false;
    }
    let dv1 = cpf_check_digit(&digits[..9], 10);
    let dv2 = cpf_check_digit(&digits[..10], 11);
    digits[9] == dv1 && digits[10] == dv2
}

/// CNPJ check: fourteen digits (separators tolerated), not all equal, both
/// verification digits consistent with the mod-11 scheme.
pub fn is_valid_cnpj(value: &str) -> bool {
    let digits = match extract_digits(value, 14) {
        Some(d) => d,
        None => return false,
    };
    if all_equal(&digits) {
        return false;
    }
    const WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    let dv1 = cnpj_check_digit(&digits[..12], &WEIGHTS_1);
    let dv2 = cnpj_check_digit(&digits[..13], &WEIGHTS_2);
    digits[12] == dv1 && digits[13] == dv2
}

/// Digits of a formatted document number. Dots, dashes and slashes are
/// stripped; any other character, or a wrong digit count, is a mismatch.
fn extract_digits(value: &str, expected_len: usize) -> Option<Vec<u32>> {
    let mut digits = Vec::with_capacity(expected_len);
    for c in value.chars() {
        match c {
            '0'..='9' => digits.push(c as u32 - '0' as u32),
            '.' | '-' | '/' => continue,
            _ => return None,
        }
    }
    if digits.len() == expected_len {
        Some(digits)
    } else {
        None
    }
}

fn all_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn cpf_check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();
    let r = (sum * 10) % 11;
    if r == 10 {
        0
    } else {
        r
    }
}

fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let r = sum % 11;
    if r < 2 {
        0
    } else {
        11 - r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules_accumulate() {
        let mut errors = Vec::new();
        validate_name(None, &mut errors);
        assert_eq!(errors, vec!["Nome nao pode ser vazio"]);

        let mut errors = Vec::new();
        validate_name(Some(""), &mut errors);
        assert_eq!(
            errors,
            vec!["Nome nao pode ser vazio", "Nome deve conter entre 3 e 200 caracteres"]
        );

        let mut errors = Vec::new();
        validate_name(Some("Jo"), &mut errors);
        assert_eq!(errors, vec!["Nome deve conter entre 3 e 200 caracteres"]);

        let mut errors = Vec::new();
        validate_name(Some("Joana"), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn email_rules_accumulate() {
        let mut errors = Vec::new();
        validate_email(Some("a@b"), &mut errors);
        assert_eq!(
            errors,
            vec!["Email deve conter entre 5 e 200 caracteres", "Email invalido"]
        );

        let mut errors = Vec::new();
        validate_email(Some("joana@empresa.com"), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn password_only_checks_presence() {
        let mut errors = Vec::new();
        validate_password(None, &mut errors);
        validate_password(Some(""), &mut errors);
        assert_eq!(errors, vec!["Senha nao pode ser vazia", "Senha nao pode ser vazia"]);

        let mut errors = Vec::new();
        validate_password(Some("x"), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn valid_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@sub.example.org"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user example@ex.com"));
    }

    #[test]
    fn cpf_accepts_known_valid_numbers() {
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("111.444.777-35"));
    }

    #[test]
    fn cpf_rejects_bad_numbers() {
        assert!(!is_valid_cpf("11144477736")); // wrong check digit
        assert!(!is_valid_cpf("11111111111")); // all equal
        assert!(!is_valid_cpf("1114447773")); // short
        assert!(!is_valid_cpf("111444777350")); // long
        assert!(!is_valid_cpf("11144A77735")); // stray character
        assert!(!is_valid_cpf(""));
    }

    #[test]
    fn cnpj_accepts_known_valid_numbers() {
        assert!(is_valid_cnpj("23355544000171"));
        assert!(is_valid_cnpj("23.355.544/0001-71"));
    }

    #[test]
    fn cnpj_rejects_bad_numbers() {
        assert!(!is_valid_cnpj("23355544000172")); // wrong check digit
        assert!(!is_valid_cnpj("00000000000000")); // all equal
        assert!(!is_valid_cnpj("2335554400017")); // short
        assert!(!is_valid_cnpj(""));
    }

    #[test]
    fn cpf_and_cnpj_feed_the_error_list() {
        let mut errors = Vec::new();
        validate_cpf(Some(""), &mut errors);
        assert_eq!(errors, vec!["CPF nao pode ser vazio", "CPF invalido"]);

        let mut errors = Vec::new();
        validate_cnpj(Some("123"), &mut errors);
        assert_eq!(errors, vec!["CNPJ invalido"]);
    }

    #[test]
    fn hourly_rate_parses_or_reports() {
        let mut errors = Vec::new();
        assert_eq!(parse_hourly_rate(None, &mut errors), None);
        assert!(errors.is_empty());

        let rate = parse_hourly_rate(Some("75.50"), &mut errors);
        assert_eq!(rate.map(|r| r.to_string()), Some("75.50".to_string()));
        assert!(errors.is_empty());

        assert_eq!(parse_hourly_rate(Some("muito"), &mut errors), None);
        assert_eq!(errors, vec!["Valor da hora invalido"]);
    }

    #[test]
    fn hours_parse_or_report() {
        let mut errors = Vec::new();
        assert_eq!(parse_daily_work_hours(Some("8"), &mut errors), Some(8.0));
        assert_eq!(parse_lunch_hours(Some("1.5"), &mut errors), Some(1.5));
        assert!(errors.is_empty());

        assert_eq!(parse_daily_work_hours(Some("NaN"), &mut errors), None);
        assert_eq!(parse_lunch_hours(Some("uma"), &mut errors), None);
        assert_eq!(
            errors,
            vec![
                "Quantidade de horas de trabalho invalida",
                "Quantidade de horas de almoco invalida"
            ]
        );
    }
}
