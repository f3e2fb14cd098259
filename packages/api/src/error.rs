use store::ValidationError;
use thiserror::Error;

/// Failures a boundary call can report back to the views.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("未找到奖学金 #{0}")]
    UnknownScholarship(u32),

    #[error("未找到模版 #{0}")]
    UnknownTemplate(u32),

    #[error("该功能需要升级高级版")]
    PremiumRequired,

    #[error("未知的套餐: {0}")]
    UnknownPlan(String),
}

impl ApiError {
    /// Short toast title for this failure.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "请检查输入",
            ApiError::UnknownScholarship(_) | ApiError::UnknownTemplate(_) => "内容不存在",
            ApiError::PremiumRequired => "需要高级版",
            ApiError::UnknownPlan(_) => "订阅失败",
        }
    }
}
