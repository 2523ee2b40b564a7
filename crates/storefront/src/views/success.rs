use askama::Template;

/// Order accepted.
#[derive(Template)]
#[template(path = "screens/success.html")]
pub struct SuccessTemplate {
    /// Formatted amount charged.
    pub total: String,
}
