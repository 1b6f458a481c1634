//! # 비밀번호 다이제스트
//!
//! SHA-256 기반의 결정적 단방향 변환입니다. 솔트와 스트레칭이 없으므로
//! 보안 강화용이 아니며, 평문 저장을 피하기 위한 자리표시자 구현입니다.

use sha2::{Digest, Sha256};

/// 평문 비밀번호를 소문자 16진수 SHA-256 다이제스트로 변환합니다.
///
/// 같은 입력은 항상 같은 출력을 냅니다.
///
/// ```rust,ignore
/// let digest = hash_password("p1");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// `hash_password(password) == digest` 인지 확인합니다.
pub fn verify_password(digest: &str, password: &str) -> bool {
    hash_password(password) == digest
}
