mod access_token;
mod customer_purchase;
mod payment_method;
mod product;
mod station;
mod user;
