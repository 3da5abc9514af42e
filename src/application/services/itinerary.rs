//! Itinerary use-cases: the grouped read path, validated writes with
//! ownership checks, "à visiter" bookmarks and the popularity reports.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    group_rows, Caller, CategoryCount, DestinationInput, DestinationRef, DomainError, DomainResult,
    Itinerary, ItineraryDraft, ItineraryFilter, ItineraryInput, ItinerarySummary, NewDestination,
    PopularItinerary, RepositoryProvider,
};
use crate::domain::itinerary::MIN_DESTINATIONS;
use crate::shared::errors::FieldErrorsBuilder;

/// Size of the "most bookmarked" report
pub const TOP_LIMIT: u64 = 10;

pub struct ItineraryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ItineraryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Read path ───────────────────────────────────────────────

    async fn grouped(&self, filter: ItineraryFilter) -> DomainResult<Vec<ItinerarySummary>> {
        let rows = self.repos.itineraries().find_rows(filter).await?;
        Ok(group_rows(rows))
    }

    pub async fn list(&self) -> DomainResult<Vec<ItinerarySummary>> {
        self.grouped(ItineraryFilter::All).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<ItinerarySummary> {
        self.grouped(ItineraryFilter::Id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found("Itinerary", id))
    }

    pub async fn by_category(&self, category_id: i32) -> DomainResult<Vec<ItinerarySummary>> {
        self.grouped(ItineraryFilter::Category(category_id)).await
    }

    pub async fn search(&self, term: &str) -> DomainResult<Vec<ItinerarySummary>> {
        self.grouped(ItineraryFilter::TitleContains(term.to_string()))
            .await
    }

    pub async fn owned_by(&self, caller: &Caller) -> DomainResult<Vec<ItinerarySummary>> {
        self.grouped(ItineraryFilter::Owner(caller.user_id)).await
    }

    pub async fn to_visit(&self, caller: &Caller) -> DomainResult<Vec<ItinerarySummary>> {
        self.grouped(ItineraryFilter::BookmarkedBy(caller.user_id))
            .await
    }

    // ── Write path ──────────────────────────────────────────────

    pub async fn create(&self, caller: &Caller, input: ItineraryInput) -> DomainResult<Itinerary> {
        let draft = self.validate(input).await?;
        self.repos.itineraries().create(caller.user_id, draft).await
    }

    /// Full replace of the scalar fields and the destination list.
    ///
    /// Only the owner may update; nothing is written otherwise.
    pub async fn update(
        &self,
        caller: &Caller,
        id: i32,
        input: ItineraryInput,
    ) -> DomainResult<Itinerary> {
        let draft = self.validate(input).await?;
        self.owned(caller, id).await?;

        self.repos
            .itineraries()
            .replace(id, draft)
            .await?
            .ok_or_else(|| DomainError::not_found("Itinerary", id))
    }

    pub async fn delete(&self, caller: &Caller, id: i32) -> DomainResult<()> {
        self.owned(caller, id).await?;
        self.repos.itineraries().delete(id).await?;
        info!(itinerary_id = id, user_id = caller.user_id, "Itinerary deleted");
        Ok(())
    }

    async fn owned(&self, caller: &Caller, id: i32) -> DomainResult<Itinerary> {
        let itinerary = self.existing(id).await?;
        if itinerary.user_id != caller.user_id {
            return Err(DomainError::Forbidden(
                "You are not the owner of this itinerary".into(),
            ));
        }
        Ok(itinerary)
    }

    async fn existing(&self, id: i32) -> DomainResult<Itinerary> {
        self.repos
            .itineraries()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Itinerary", id))
    }

    /// Collect every violation of the payload before anything is written.
    async fn validate(&self, input: ItineraryInput) -> DomainResult<ItineraryDraft> {
        let mut errors = FieldErrorsBuilder::new();
        errors.require("titre", &input.titre);
        errors.require("duree", &input.duree);
        errors.require("image", &input.image);

        match input.category_id {
            None => errors.add("categorie_id", "The categorie id field is required."),
            Some(id) => {
                if self.repos.categories().find_by_id(id).await?.is_none() {
                    errors.add("categorie_id", "The selected categorie id is invalid.");
                }
            }
        }

        if input.destinations.len() < MIN_DESTINATIONS {
            errors.add(
                "destinations",
                format!(
                    "The destinations field must have at least {} items.",
                    MIN_DESTINATIONS
                ),
            );
        }

        let mut destinations = Vec::with_capacity(input.destinations.len());
        let mut referenced = Vec::new();
        for (index, entry) in input.destinations.into_iter().enumerate() {
            match destination_ref(index, entry, &mut errors) {
                Some(DestinationRef::Existing(id)) => {
                    referenced.push((index, id));
                    destinations.push(DestinationRef::Existing(id));
                }
                Some(other) => destinations.push(other),
                None => {}
            }
        }

        let ids: Vec<i32> = referenced.iter().map(|(_, id)| *id).collect();
        let missing = self.repos.destinations().missing_ids(&ids).await?;
        for (index, id) in referenced {
            if missing.contains(&id) {
                errors.add(
                    format!("destinations.{}.id", index),
                    format!("The selected destinations.{}.id is invalid.", index),
                );
            }
        }

        errors.finish()?;

        Ok(ItineraryDraft {
            titre: input.titre.trim().to_string(),
            duree: input.duree.trim().to_string(),
            image: input.image.trim().to_string(),
            category_id: input.category_id.unwrap_or_default(),
            destinations,
        })
    }

    // ── Bookmarks ───────────────────────────────────────────────

    /// Returns `false` when the itinerary was already bookmarked.
    pub async fn bookmark(&self, caller: &Caller, id: i32) -> DomainResult<bool> {
        self.existing(id).await?;
        self.repos.bookmarks().add(caller.user_id, id).await
    }

    /// Returns `false` when there was no bookmark to remove.
    pub async fn unbookmark(&self, caller: &Caller, id: i32) -> DomainResult<bool> {
        self.existing(id).await?;
        self.repos.bookmarks().remove(caller.user_id, id).await
    }

    // ── Reports ─────────────────────────────────────────────────

    pub async fn most_bookmarked(&self) -> DomainResult<Vec<PopularItinerary>> {
        self.repos.itineraries().most_bookmarked(TOP_LIMIT).await
    }

    pub async fn category_counts(&self) -> DomainResult<Vec<CategoryCount>> {
        self.repos.categories().count_itineraries().await
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// An entry is either `{id}` or all four inline fields, never both.
fn destination_ref(
    index: usize,
    entry: DestinationInput,
    errors: &mut FieldErrorsBuilder,
) -> Option<DestinationRef> {
    let inline = [
        ("logement", &entry.logement),
        ("nom", &entry.nom),
        ("activite", &entry.activite),
        ("plats", &entry.plats),
    ];
    let any_inline = inline.iter().any(|(_, v)| v.is_some());

    match entry.id {
        Some(_) if any_inline => {
            errors.add(
                format!("destinations.{}", index),
                "Provide either an id or the inline destination fields, not both.",
            );
            None
        }
        Some(id) => Some(DestinationRef::Existing(id)),
        None => {
            let mut complete = true;
            for (field, value) in inline {
                if !present(value) {
                    complete = false;
                    errors.add(
                        format!("destinations.{}.{}", index, field),
                        format!(
                            "The destinations.{index}.{field} field is required when destinations.{index}.id is not present."
                        ),
                    );
                }
            }
            if !complete {
                return None;
            }
            Some(DestinationRef::New(NewDestination {
                logement: entry.logement.unwrap_or_default().trim().to_string(),
                nom: entry.nom.unwrap_or_default().trim().to_string(),
                activites: entry.activite.unwrap_or_default().trim().to_string(),
                plats: entry.plats.unwrap_or_default().trim().to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::UserRole;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::test_support::{seed_category, seed_itinerary, seed_user, test_db};

    fn caller(user_id: i32) -> Caller {
        Caller {
            user_id,
            name: "tester".into(),
            role: UserRole::User,
            token_id: "jti".into(),
            expires_at: Utc::now(),
        }
    }

    fn inline(nom: &str) -> DestinationInput {
        DestinationInput {
            id: None,
            logement: Some(format!("{} Hotel", nom)),
            nom: Some(nom.to_string()),
            activite: Some("visit".into()),
            plats: Some("tajine".into()),
        }
    }

    fn by_id(id: i32) -> DestinationInput {
        DestinationInput {
            id: Some(id),
            ..Default::default()
        }
    }

    fn input(titre: &str, category_id: i32, destinations: Vec<DestinationInput>) -> ItineraryInput {
        ItineraryInput {
            titre: titre.into(),
            duree: "5 days".into(),
            image: "cover.png".into(),
            category_id: Some(category_id),
            destinations,
        }
    }

    struct Fixture {
        svc: ItineraryService,
        repos: Arc<SeaOrmRepositoryProvider>,
        db: sea_orm::DatabaseConnection,
    }

    async fn fixture() -> Fixture {
        let db = test_db().await;
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        Fixture {
            svc: ItineraryService::new(repos.clone()),
            repos,
            db,
        }
    }

    fn field_errors(err: DomainError) -> crate::shared::errors::FieldErrors {
        match err {
            DomainError::InvalidFields(fields) => fields,
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_groups_three_destinations_under_one_record() {
        let f = fixture().await;
        let user = seed_user(&f.db, "owner@example.com").await;
        let category = seed_category(&f.db, "Monument").await;

        let created = f
            .svc
            .create(
                &caller(user.id),
                input(
                    "Tour to Youssoufia",
                    category.id,
                    vec![inline("Youssoufia"), inline("Safi"), inline("Marrakech")],
                ),
            )
            .await
            .unwrap();
        assert_eq!(created.user_id, user.id);

        let record = f.svc.get(created.id).await.unwrap();
        assert_eq!(record.titre, "Tour to Youssoufia");
        assert_eq!(record.user_name, user.name);
        assert_eq!(record.category_name, "Monument");
        assert_eq!(record.destinations.len(), 3);
        assert_eq!(record.destinations[0].activites, "visit");
    }

    #[tokio::test]
    async fn fewer_than_two_destinations_writes_nothing() {
        let f = fixture().await;
        let user = seed_user(&f.db, "owner@example.com").await;
        let category = seed_category(&f.db, "Monument").await;

        let err = f
            .svc
            .create(&caller(user.id), input("Solo", category.id, vec![inline("Safi")]))
            .await
            .unwrap_err();

        assert!(field_errors(err).contains_key("destinations"));
        assert!(f.repos.itineraries().find_rows(ItineraryFilter::All).await.unwrap().is_empty());
        assert!(f.repos.destinations().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn every_violation_is_reported() {
        let f = fixture().await;
        let user = seed_user(&f.db, "owner@example.com").await;

        let mut half = inline("Half");
        half.plats = None;
        let mut both = inline("Both");
        both.id = Some(1);

        let err = f
            .svc
            .create(
                &caller(user.id),
                ItineraryInput {
                    titre: String::new(),
                    duree: "1 day".into(),
                    image: String::new(),
                    category_id: Some(404),
                    destinations: vec![half, by_id(999), both],
                },
            )
            .await
            .unwrap_err();

        let fields = field_errors(err);
        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "categorie_id",
                "destinations.0.plats",
                "destinations.1.id",
                "destinations.2",
                "image",
                "titre",
            ]
        );
    }

    #[tokio::test]
    async fn existing_destinations_can_be_referenced() {
        let f = fixture().await;
        let user = seed_user(&f.db, "owner@example.com").await;
        let category = seed_category(&f.db, "Monument").await;
        let safi = f
            .repos
            .destinations()
            .create(NewDestination {
                logement: "Riad".into(),
                nom: "Safi".into(),
                activites: "pottery".into(),
                plats: "sardines".into(),
            })
            .await
            .unwrap();

        let created = f
            .svc
            .create(
                &caller(user.id),
                input("Coast", category.id, vec![by_id(safi.id), inline("Oualidia")]),
            )
            .await
            .unwrap();

        let ids = f.repos.itineraries().destination_ids(created.id).await.unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], safi.id);
        assert_eq!(f.repos.destinations().find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn non_owner_update_changes_nothing() {
        let f = fixture().await;
        let owner = seed_user(&f.db, "owner@example.com").await;
        let intruder = seed_user(&f.db, "intruder@example.com").await;
        let category = seed_category(&f.db, "Monument").await;
        let it = seed_itinerary(&f.db, owner.id, category.id, "Original", &["a", "b"]).await;
        let before = f.repos.itineraries().destination_ids(it.id).await.unwrap();

        let err = f
            .svc
            .update(
                &caller(intruder.id),
                it.id,
                input("Hijacked", category.id, vec![inline("x"), inline("y")]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let stored = f.repos.itineraries().find_by_id(it.id).await.unwrap().unwrap();
        assert_eq!(stored.titre, "Original");
        assert_eq!(f.repos.itineraries().destination_ids(it.id).await.unwrap(), before);

        let err = f.svc.delete(&caller(intruder.id), it.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn owner_update_replaces_destinations() {
        let f = fixture().await;
        let owner = seed_user(&f.db, "owner@example.com").await;
        let category = seed_category(&f.db, "Monument").await;
        let it = seed_itinerary(&f.db, owner.id, category.id, "Original", &["a", "b", "c"]).await;

        let updated = f
            .svc
            .update(
                &caller(owner.id),
                it.id,
                input("Renamed", category.id, vec![inline("x"), inline("y")]),
            )
            .await
            .unwrap();
        assert_eq!(updated.titre, "Renamed");

        let record = f.svc.get(it.id).await.unwrap();
        let names: Vec<_> = record.destinations.iter().map(|d| d.nom.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[tokio::test]
    async fn update_missing_itinerary_is_not_found() {
        let f = fixture().await;
        let owner = seed_user(&f.db, "owner@example.com").await;
        let category = seed_category(&f.db, "Monument").await;

        let err = f
            .svc
            .update(&caller(owner.id), 77, input("x", category.id, vec![inline("a"), inline("b")]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn bookmarks_feed_to_visit_and_top() {
        let f = fixture().await;
        let owner = seed_user(&f.db, "owner@example.com").await;
        let fan = seed_user(&f.db, "fan@example.com").await;
        let category = seed_category(&f.db, "Monument").await;
        let a = seed_itinerary(&f.db, owner.id, category.id, "A", &["a", "b"]).await;
        let b = seed_itinerary(&f.db, owner.id, category.id, "B", &["c", "d"]).await;

        assert!(f.svc.bookmark(&caller(fan.id), b.id).await.unwrap());
        assert!(!f.svc.bookmark(&caller(fan.id), b.id).await.unwrap());
        assert!(f.svc.bookmark(&caller(owner.id), b.id).await.unwrap());
        assert!(f.svc.bookmark(&caller(owner.id), a.id).await.unwrap());

        let to_visit = f.svc.to_visit(&caller(fan.id)).await.unwrap();
        assert_eq!(to_visit.len(), 1);
        assert_eq!(to_visit[0].itinerary_id, b.id);

        let top = f.svc.most_bookmarked().await.unwrap();
        assert_eq!(top[0].id, b.id);
        assert_eq!(top[0].favoris_count, 2);
        assert!(top.len() <= TOP_LIMIT as usize);

        assert!(f.svc.unbookmark(&caller(fan.id), b.id).await.unwrap());
        assert!(f.svc.to_visit(&caller(fan.id)).await.unwrap().is_empty());

        assert!(matches!(
            f.svc.bookmark(&caller(fan.id), 999).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn top_report_is_capped() {
        let f = fixture().await;
        let user = seed_user(&f.db, "owner@example.com").await;
        let category = seed_category(&f.db, "Monument").await;
        for i in 0..12 {
            let it = seed_itinerary(&f.db, user.id, category.id, &format!("T{i}"), &["a", "b"]).await;
            f.svc.bookmark(&caller(user.id), it.id).await.unwrap();
        }

        assert_eq!(f.svc.most_bookmarked().await.unwrap().len(), TOP_LIMIT as usize);
    }

    #[tokio::test]
    async fn search_and_mine() {
        let f = fixture().await;
        let alice = seed_user(&f.db, "alice@example.com").await;
        let bob = seed_user(&f.db, "bob@example.com").await;
        let category = seed_category(&f.db, "Monument").await;
        seed_itinerary(&f.db, alice.id, category.id, "Tour to Youssoufia", &["a", "b"]).await;
        seed_itinerary(&f.db, bob.id, category.id, "Atlas", &["c", "d"]).await;

        let hits = f.svc.search("youssou").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].titre, "Tour to Youssoufia");
        assert!(f.svc.search("zzz").await.unwrap().is_empty());

        let mine = f.svc.owned_by(&caller(bob.id)).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].titre, "Atlas");
    }
}
