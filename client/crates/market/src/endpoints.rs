//! Backend API paths

use kernel::id::{ContractId, DemandId, OrderId, ProductId, UserId};

// Auth
pub const AUTH_LOGIN: &str = "/api/common/auth/login";
pub const AUTH_REGISTER: &str = "/api/common/auth/register";
pub const AUTH_LOGOUT: &str = "/api/common/auth/logout";
pub const AUTH_PROFILE: &str = "/api/common/auth/profile";

// Categories and search
pub const CATEGORY_TREE: &str = "/api/shared/product-category/tree";
pub const SEARCH_FARMERS: &str = "/api/search/farmers";
pub const SEARCH_PRODUCTS: &str = "/api/search/products";
pub const SEARCH_DEMANDS: &str = "/api/search/demands";
pub const SEARCH_PURCHASERS: &str = "/api/search/purchasers";

// Farmer
pub const FARMER_INFO_MY: &str = "/api/farmer/farmer-info/my";
pub const FARMER_PRODUCTS: &str = "/api/farmer/products";
pub const FARMER_PRODUCTS_MY: &str = "/api/farmer/products/my";

// Purchaser
pub const PURCHASER_DEMANDS: &str = "/api/purchaser/demands";
pub const PURCHASER_ORDERS: &str = "/api/purchaser/orders";
pub const PURCHASER_ORDERS_PAGE: &str = "/api/purchaser/orders/page";
pub const PURCHASER_CONTRACTS: &str = "/api/purchaser/contracts";
pub const PURCHASER_PAYMENTS: &str = "/api/purchaser/payments";

// Shared docking
pub const DOCKINGS_MY: &str = "/api/shared/dockings/my";
pub const DOCKINGS_RESPOND: &str = "/api/shared/dockings/respond";

// Admin
pub const ADMIN_USERS: &str = "/api/admin/users";
pub const ADMIN_USERS_PAGE: &str = "/api/admin/users/page";
pub const ADMIN_PRODUCTS: &str = "/api/admin/products";
pub const ADMIN_PRODUCTS_PAGE: &str = "/api/admin/products/page";

pub fn product(id: &ProductId) -> String {
    format!("{FARMER_PRODUCTS}/{id}")
}

pub fn product_off_sale(id: &ProductId) -> String {
    format!("{FARMER_PRODUCTS}/{id}/off-sale")
}

pub fn product_on_sale(id: &ProductId) -> String {
    format!("{FARMER_PRODUCTS}/{id}/on-sale")
}

pub fn demand(id: &DemandId) -> String {
    format!("{PURCHASER_DEMANDS}/{id}")
}

pub fn order(id: &OrderId) -> String {
    format!("{PURCHASER_ORDERS}/{id}")
}

pub fn contract_sign(id: &ContractId) -> String {
    format!("{PURCHASER_CONTRACTS}/{id}/sign")
}

pub fn contract_reject(id: &ContractId) -> String {
    format!("{PURCHASER_CONTRACTS}/{id}/reject")
}

pub fn user_status(id: &UserId) -> String {
    format!("{ADMIN_USERS}/{id}/status")
}

pub fn admin_product(id: &ProductId) -> String {
    format!("{ADMIN_PRODUCTS}/{id}")
}
