#[cfg(test)]
mod tests {
    use crate::core::models::ProcessedImage;

    #[test]
    fn test_payload_is_kept_verbatim() {
        let processed = ProcessedImage::from_payload("data:image/png;base64,AAAA".to_string());
        assert_eq!(processed.as_payload_str(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_decode_strips_data_uri_prefix() {
        let processed = ProcessedImage::from_payload("data:image/png;base64,AAAA".to_string());
        assert_eq!(processed.decode_bytes().unwrap(), vec![0u8, 0u8, 0u8]);
    }

    #[test]
    fn test_decode_accepts_bare_base64() {
        let processed = ProcessedImage::from_payload("AQID".to_string());
        assert_eq!(processed.decode_bytes().unwrap(), vec![1u8, 2u8, 3u8]);
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let processed = ProcessedImage::from_payload("data:image/png;base64,???".to_string());
        assert!(processed.decode_bytes().is_err());
    }

    #[test]
    fn test_debug_omits_payload_contents() {
        let processed = ProcessedImage::from_payload("data:image/png;base64,AAAA".to_string());
        let debug_str = format!("{:?}", processed);
        assert!(debug_str.contains("image_len"));
        assert!(!debug_str.contains("AAAA"));
    }
}
