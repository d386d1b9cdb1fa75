use super::UploadConfig;

/// 头像允许的扩展名
pub const PROFILE_IMAGE_TYPES: &[&str] = &[".jpeg", ".png", ".jpg", ".gif"];

impl UploadConfig {
    /// 存储路径转为对外访问地址：`{public_base_url}/storage/{path}`
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/{}",
            self.public_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn profile_image_types(&self) -> Vec<String> {
        PROFILE_IMAGE_TYPES.iter().map(|t| t.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(base: &str) -> UploadConfig {
        UploadConfig {
            dir: "uploads".into(),
            max_size: 1024,
            profile_max_size: 1024,
            allowed_types: vec![".pdf".into()],
            public_base_url: base.into(),
        }
    }

    #[test]
    fn test_public_url_joins_once() {
        assert_eq!(
            upload("http://localhost:8080/").public_url("payments/a.png"),
            "http://localhost:8080/storage/payments/a.png"
        );
        assert_eq!(
            upload("https://school.ph").public_url("/profiles/b.jpg"),
            "https://school.ph/storage/profiles/b.jpg"
        );
    }
}
