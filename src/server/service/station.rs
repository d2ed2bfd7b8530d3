use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::ListDto,
        station::{CreateStationDto, StationDto, UpdateStationDto},
    },
    server::{
        data::station::StationRepository,
        error::AppError,
        event::bus::EventBus,
        model::station::{CreateStationParam, UpdateStationParam},
        query::list_query::ListQuery,
        service::{cache::EntityCache, change::ChangeNotifier},
    },
};

const COLLECTION: &str = "stations";

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a EntityCache,
    events: &'a EventBus,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a EntityCache, events: &'a EventBus) -> Self {
        Self { db, cache, events }
    }

    fn notifier(&self) -> ChangeNotifier<'_> {
        ChangeNotifier::new(self.cache, self.events, COLLECTION)
    }

    /// Lists one page of stations with its paginator.
    pub async fn list(&self, query: &ListQuery) -> Result<ListDto<StationDto>, AppError> {
        let repo = StationRepository::new(self.db);

        let total = repo.count(query).await?;
        let listing = repo.list(query).await?;

        Ok(ListDto::new(
            listing.into_dto(|station| station.into_dto()),
            query.paginator(total).into_dto(),
        ))
    }

    /// Gets a station by id, serving from cache when possible.
    pub async fn get(&self, id: &str) -> Result<Option<StationDto>, AppError> {
        if let Some(cached) = self.cache.get::<StationDto>(COLLECTION, id).await {
            return Ok(Some(cached));
        }

        let Some(station) = StationRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let dto = station.into_dto();
        self.cache.put(COLLECTION, id, &dto).await;

        Ok(Some(dto))
    }

    pub async fn create(&self, dto: CreateStationDto) -> Result<StationDto, AppError> {
        let station = StationRepository::new(self.db)
            .create(CreateStationParam::from_dto(dto))
            .await?;

        let dto = station.into_dto();
        self.notifier().created(&dto.id, Some(dto.id.clone()), &dto);

        Ok(dto)
    }

    pub async fn update(
        &self,
        id: &str,
        dto: UpdateStationDto,
    ) -> Result<Option<StationDto>, AppError> {
        let Some(station) = StationRepository::new(self.db)
            .update(id, UpdateStationParam::from_dto(dto))
            .await?
        else {
            return Ok(None);
        };

        let dto = station.into_dto();
        self.notifier()
            .updated(&dto.id, Some(dto.id.clone()), &dto)
            .await;

        Ok(Some(dto))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = StationRepository::new(self.db).delete(id).await?;

        if deleted {
            self.notifier().deleted(id, Some(id.to_string())).await;
        }

        Ok(deleted)
    }
}
