use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{login, logout},
        customer_purchase::{
            get_customer_purchase_by_id, get_customer_purchases, get_my_customer_purchases,
            record_customer_purchase,
        },
        payment_method::{
            create_payment_method, delete_payment_method, get_payment_method_by_id,
            get_payment_methods, update_payment_method,
        },
        product::{
            create_product, delete_product, get_product_by_id, get_products, update_product,
        },
        station::{
            create_station, delete_station, get_station_by_id, get_stations, update_station,
        },
        user::{
            create_user, delete_user, get_me, get_station_users, get_user_by_id, get_users,
            update_user,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_routes())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/users", get(get_users).post(create_user))
        .route("/users/station", get(get_station_users))
        .route("/users/me", get(get_me))
        .route(
            "/users/{id}",
            get(get_user_by_id).patch(update_user).delete(delete_user),
        )
        .route("/stations", get(get_stations).post(create_station))
        .route(
            "/stations/{id}",
            get(get_station_by_id)
                .patch(update_station)
                .delete(delete_station),
        )
        .route("/products", get(get_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product_by_id)
                .patch(update_product)
                .delete(delete_product),
        )
        .route(
            "/payment-methods",
            get(get_payment_methods).post(create_payment_method),
        )
        .route(
            "/payment-methods/{id}",
            get(get_payment_method_by_id)
                .patch(update_payment_method)
                .delete(delete_payment_method),
        )
        .route(
            "/customer-purchases",
            get(get_customer_purchases).post(record_customer_purchase),
        )
        .route("/customer-purchases/me", get(get_my_customer_purchases))
        .route(
            "/customer-purchases/{id}",
            get(get_customer_purchase_by_id),
        )
}
