//! Input validation errors raised before a transition is allowed.

use thiserror::Error;

use crate::models::IntakeQuestion;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("请输入邮箱：邮箱地址不能为空")]
    EmptyEmail,

    #[error("邮箱地址格式不正确: {0}")]
    InvalidEmail(String),

    #[error("请完成当前问题：{}", .0.title())]
    UnansweredQuestion(IntakeQuestion),

    #[error("请回答第 {} 个申请问题", .0 + 1)]
    MissingAnswer(usize),

    #[error("请上传所需材料：{0}")]
    MissingDocument(String),

    #[error("文件格式不支持，请上传PDF或Word格式的简历: {0}")]
    UnsupportedResumeFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingAnswer(0).to_string(),
            "请回答第 1 个申请问题"
        );
        assert!(ValidationError::UnansweredQuestion(IntakeQuestion::Gpa)
            .to_string()
            .contains("GPA"));
    }
}
