use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::ListDto,
        customer_purchase::{CreateCustomerPurchaseDto, CustomerPurchaseDto},
    },
    server::{
        data::customer_purchase::CustomerPurchaseRepository,
        error::AppError,
        event::bus::EventBus,
        model::{auth::AuthSession, customer_purchase::CreateCustomerPurchaseParam},
        query::{list_query::ListQuery, predicate::{compile, Predicate}},
        service::{cache::EntityCache, change::ChangeNotifier, scope::station_scoped},
    },
};

const COLLECTION: &str = "customer_purchases";

pub struct CustomerPurchaseService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a EntityCache,
    events: &'a EventBus,
}

impl<'a> CustomerPurchaseService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a EntityCache, events: &'a EventBus) -> Self {
        Self { db, cache, events }
    }

    /// Lists purchases across every station.
    pub async fn list(&self, query: &ListQuery) -> Result<ListDto<CustomerPurchaseDto>, AppError> {
        let predicate = compile(query.filter.as_deref())?;
        self.list_where(predicate, query).await
    }

    /// Lists purchases recorded at the caller's station.
    pub async fn list_for_station(
        &self,
        query: &ListQuery,
        session: &AuthSession,
    ) -> Result<ListDto<CustomerPurchaseDto>, AppError> {
        let predicate = station_scoped(query, session)?;
        self.list_where(predicate, query).await
    }

    async fn list_where(
        &self,
        predicate: Predicate<entity::customer_purchase::Entity>,
        query: &ListQuery,
    ) -> Result<ListDto<CustomerPurchaseDto>, AppError> {
        let repo = CustomerPurchaseRepository::new(self.db);

        let total = repo.count(&predicate).await?;
        let listing = repo.list(predicate, query).await?;

        Ok(ListDto::new(
            listing.into_dto(|purchase| purchase.into_dto()),
            query.paginator(total).into_dto(),
        ))
    }

    pub async fn get(&self, id: &str) -> Result<Option<CustomerPurchaseDto>, AppError> {
        if let Some(cached) = self.cache.get::<CustomerPurchaseDto>(COLLECTION, id).await {
            return Ok(Some(cached));
        }

        let Some(purchase) = CustomerPurchaseRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let dto = purchase.into_dto();
        self.cache.put(COLLECTION, id, &dto).await;

        Ok(Some(dto))
    }

    /// Records a purchase against the caller and their station.
    pub async fn record(
        &self,
        dto: CreateCustomerPurchaseDto,
        session: &AuthSession,
    ) -> Result<CustomerPurchaseDto, AppError> {
        let param = CreateCustomerPurchaseParam::from_dto(
            dto,
            session.user_id.clone(),
            session.station_id.clone(),
        );
        let purchase = CustomerPurchaseRepository::new(self.db).create(param).await?;

        let dto = purchase.into_dto();
        ChangeNotifier::new(self.cache, self.events, COLLECTION).created(
            &dto.id,
            dto.station_id.clone(),
            &dto,
        );

        Ok(dto)
    }
}
