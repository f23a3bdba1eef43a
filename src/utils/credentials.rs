use bcrypt::{DEFAULT_COST, hash};

use crate::error::{AppError, AppResult};

const MAX_FIELD_LEN: usize = 128;

/// 校验邮箱格式，返回去除首尾空白并转为小写后的邮箱
pub fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_lowercase();
    let valid = email.len() <= MAX_FIELD_LEN
        && matches!(email.split_once('@'), Some((local, domain))
            if !local.is_empty() && domain.contains('.') && !domain.contains('@'));
    if !valid {
        return Err(AppError::ValidationError("Invalid email address".to_string()));
    }
    Ok(email)
}

pub fn validate_mobile(mobile: &str) -> AppResult<()> {
    if mobile.is_empty() || mobile.len() > MAX_FIELD_LEN {
        return Err(AppError::ValidationError("Invalid mobile number".to_string()));
    }
    Ok(())
}

/// bcrypt 只使用前 72 字节
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < 8 || password.len() > 72 {
        return Err(AppError::ValidationError(
            "Password length must be between 8 and 72 bytes".to_string(),
        ));
    }
    Ok(())
}

/// 对密码进行哈希
pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("failed to hash password: {e}")))
}
