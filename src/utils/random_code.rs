use rand::Rng;
use rand::distr::Alphanumeric;

/// 随机字母数字串
pub fn generate_random_code(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// 收据号：10 位大写字母与数字
pub fn generate_or_number() -> String {
    generate_random_code(10).to_uppercase()
}

/// 管理员编号：`ADM-` 加 8 位大写字母与数字
pub fn generate_admin_id() -> String {
    format!("ADM-{}", generate_random_code(8).to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_number_shape() {
        let or = generate_or_number();
        assert_eq!(or.len(), 10);
        assert!(
            or.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_admin_id_prefix() {
        let id = generate_admin_id();
        assert!(id.starts_with("ADM-"));
        assert_eq!(id.len(), 12);
    }

    #[test]
    fn test_random_code_length() {
        assert_eq!(generate_random_code(0), "");
        assert_eq!(generate_random_code(24).len(), 24);
    }
}
