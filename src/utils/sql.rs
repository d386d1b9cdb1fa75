/// 转义 LIKE 通配符，避免用户输入中的 % 与 _ 被当作模式
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("dela cruz"), "dela cruz");
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
    }
}
