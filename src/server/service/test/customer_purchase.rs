use test_utils::{
    builder::TestBuilder,
    factory::{customer_purchase::CustomerPurchaseFactory, helpers::create_station_with_admin},
};

use super::{cache, listen, next_event, session};
use crate::{
    model::{
        api::ListDataDto,
        customer_purchase::{CreateCustomerPurchaseDto, PaymentDto},
        user::Role,
    },
    server::{
        error::AppError, event::bus::EventBus, model::event::ChangeKind,
        query::list_query::ListQuery, service::customer_purchase::CustomerPurchaseService,
    },
};

fn ticket(folio: &str) -> CreateCustomerPurchaseDto {
    CreateCustomerPurchaseDto {
        folio: folio.to_string(),
        iva: 16.0,
        subtotal: 100.0,
        total: 116.0,
        total_letters: "CIENTO DIECISÉIS PESOS".to_string(),
        products: Vec::new(),
        payments: vec![PaymentDto {
            quantity: 116.0,
            key: "01".to_string(),
            description: "Efectivo".to_string(),
        }],
        client: None,
    }
}

#[tokio::test]
async fn record_attributes_purchase_to_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cache, events) = (cache(), EventBus::new());
    let mut rx = listen(&events);
    let (station, clerk) = create_station_with_admin(db).await?;
    let caller = session(&clerk.id, Role::StationAdmin, Some(&station.id));

    let purchase = CustomerPurchaseService::new(db, &cache, &events)
        .record(ticket("A-1"), &caller)
        .await?;

    assert_eq!(purchase.user_id, clerk.id);
    assert_eq!(purchase.station_id.as_deref(), Some(station.id.as_str()));

    let event = next_event(&mut rx).await;
    assert_eq!(event.kind, ChangeKind::Create);
    assert_eq!(event.collection, "customer_purchases");
    assert_eq!(event.station_id, purchase.station_id);

    Ok(())
}

#[tokio::test]
async fn station_listing_only_sees_own_purchases() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cache, events) = (cache(), EventBus::new());
    let (north, north_admin) = create_station_with_admin(db).await?;
    let (south, south_admin) = create_station_with_admin(db).await?;

    for _ in 0..3 {
        CustomerPurchaseFactory::new(db, &north_admin.id)
            .station_id(&north.id)
            .build()
            .await?;
    }
    CustomerPurchaseFactory::new(db, &south_admin.id)
        .station_id(&south.id)
        .build()
        .await?;

    let caller = session(&north_admin.id, Role::StationAdmin, Some(&north.id));
    let page = CustomerPurchaseService::new(db, &cache, &events)
        .list_for_station(&ListQuery::default(), &caller)
        .await?;

    assert_eq!(page.paginator.total_documents, 3);
    let ListDataDto::Records(records) = page.data else {
        panic!("Expected typed records without a relation");
    };
    assert!(records
        .iter()
        .all(|purchase| purchase.station_id.as_deref() == Some(north.id.as_str())));

    Ok(())
}
