#[derive(Debug, thiserror::Error)]
pub enum MachineryError {
    #[error("machinery.empty_basket")]
    EmptyBasket,
}

impl MachineryError {
    pub fn notice_message(&self) -> &'static str {
        match self {
            MachineryError::EmptyBasket => "Please add items to your basket first",
        }
    }
}
