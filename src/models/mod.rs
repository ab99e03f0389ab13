// Core models
pub mod order;
pub mod status;

pub use order::{
    parse_subdistrict, OrderFormData, OrderProduct, OrderRequest, Quantity, Subdistrict,
    SUBDISTRICTS,
};
pub use status::{parse_status, status_config, OrderStatus, StatusConfig, STATUS_ORDER};
