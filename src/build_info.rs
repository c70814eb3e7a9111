//! Compile-time build information, generated by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_info_is_populated() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }
}
