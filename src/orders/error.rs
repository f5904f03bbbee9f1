use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Order item not found")]
    ItemNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl OrderError {
    /// True for all absent-entity variants
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrderError::OrderNotFound | OrderError::ItemNotFound | OrderError::ProductNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(OrderError::OrderNotFound.is_not_found());
        assert!(OrderError::ItemNotFound.is_not_found());
        assert!(OrderError::ProductNotFound.is_not_found());
        assert!(!OrderError::Database(sqlx::Error::PoolClosed).is_not_found());
    }

    #[test]
    fn test_messages() {
        assert_eq!(OrderError::ProductNotFound.to_string(), "Product not found");
        assert_eq!(OrderError::OrderNotFound.to_string(), "Order not found");
    }
}
