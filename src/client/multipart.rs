//! Minimal `multipart/form-data` body for file uploads

use uuid::Uuid;

#[derive(Debug)]
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::with_boundary(format!("----HomepageAdmin{}", Uuid::new_v4().simple()))
    }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    pub fn file(mut self, field: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        let filename = filename.replace('"', "_");
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, field, filename, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (self.content_type(), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_part_layout() {
        let (content_type, body) = MultipartBody::with_boundary("XYZ")
            .file("file", "services.yaml", "application/x-yaml", b"Media: []")
            .finish();
        assert_eq!(content_type, "multipart/form-data; boundary=XYZ");
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "--XYZ\r\nContent-Disposition: form-data; name=\"file\"; filename=\"services.yaml\"\r\n\
             Content-Type: application/x-yaml\r\n\r\nMedia: []\r\n--XYZ--\r\n"
        );
    }

    #[test]
    fn test_random_boundary() {
        let a = MultipartBody::new().content_type();
        let b = MultipartBody::new().content_type();
        assert_ne!(a, b);
    }
}
