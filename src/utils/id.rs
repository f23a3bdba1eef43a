use rand::Rng;

const ID_MIN: u64 = 1 << 44;
const ID_MAX: u64 = (1 << 48) - 1;

/// 生成 12 位小写十六进制主键
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    format!("{:x}", rng.gen_range(ID_MIN..=ID_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        for _ in 0..100 {
            let id = generate_id();
            assert_eq!(id.len(), 12);
            assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));

            let value = u64::from_str_radix(&id, 16).unwrap();
            assert!((ID_MIN..=ID_MAX).contains(&value));
        }
    }

    #[test]
    fn test_range_bounds_are_twelve_digits() {
        assert_eq!(format!("{ID_MIN:x}"), "100000000000");
        assert_eq!(format!("{ID_MAX:x}"), "ffffffffffff");
    }
}
