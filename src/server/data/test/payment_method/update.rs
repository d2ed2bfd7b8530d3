use super::*;

/// Tests disabling a payment method with a partial update.
///
/// Expected: Ok with status false and name unchanged
#[tokio::test]
async fn disables_payment_method() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PaymentMethod)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentMethodRepository::new(db);
    let method = repo
        .create(CreatePaymentMethodParam {
            key: "28".to_string(),
            name: "Tarjeta de debito".to_string(),
            description: "Debit card".to_string(),
            status: true,
        })
        .await?;

    let updated = repo
        .update(
            &method.id,
            UpdatePaymentMethodParam {
                status: Some(false),
                ..UpdatePaymentMethodParam::default()
            },
        )
        .await?
        .expect("payment method exists");

    assert!(!updated.status);
    assert_eq!(updated.name, "Tarjeta de debito");

    Ok(())
}
