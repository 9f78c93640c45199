use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("filter error: {0}")]
    Filter(#[from] vellum_filter::FilterError),

    #[error("render error: {0}")]
    Render(#[from] vellum_render::RenderError),
}

pub type SdkResult<T> = Result<T, SdkError>;
