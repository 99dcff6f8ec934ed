//! Star schema model

use super::{CustomerRecord, DateRecord, OrderRecord, ProductRecord};

/// The fact table together with its three dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarSchema {
    pub orders: Vec<OrderRecord>,
    pub products: Vec<ProductRecord>,
    pub customers: Vec<CustomerRecord>,
    pub dates: Vec<DateRecord>,
}

impl StarSchema {
    /// True when no order survived cleaning.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
