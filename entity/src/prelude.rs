pub use super::access_token::Entity as AccessToken;
pub use super::customer_purchase::Entity as CustomerPurchase;
pub use super::payment_method::Entity as PaymentMethod;
pub use super::product::Entity as Product;
pub use super::station::Entity as Station;
pub use super::user::Entity as User;
