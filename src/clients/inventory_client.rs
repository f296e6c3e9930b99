//! # Inventory Client
//!
//! Provides a high-level API for the inventory store. It wraps a
//! `SnapshotClient<Inventory>`, validates drafts before they leave the caller and
//! unpacks the store's [`OpOutcome`] into typed results.

use crate::inventory::{
    BulkSummary, CurrentUser, FirstUser, InventoryError, InventoryOp, OpOutcome, Validate,
};
use crate::model::{
    ActivityLogEntry, Category, CategoryDraft, Inventory, Item, ItemDraft, Order, OrderDraft,
    QuantityUpdate, Supplier, SupplierDraft, User, UserDraft,
};
use async_trait::async_trait;
use paste::paste;
use snapshot_framework::{Change, FrameworkError, RecordId, SnapshotClient, StoreClient};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the inventory store actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: SnapshotClient<Inventory>,
    current_user: Arc<dyn CurrentUser>,
}

#[async_trait]
impl StoreClient<Inventory> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &SnapshotClient<Inventory> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::ActorCommunicationError(e.to_string())
    }
}

fn unexpected(outcome: OpOutcome) -> InventoryError {
    InventoryError::UnexpectedOutcome(format!("{outcome:?}"))
}

impl InventoryClient {
    pub fn new(inner: SnapshotClient<Inventory>) -> Self {
        Self {
            inner,
            current_user: Arc::new(FirstUser),
        }
    }

    /// Replaces the resolver used by [`InventoryClient::current_user`].
    pub fn with_current_user(mut self, resolver: impl CurrentUser + 'static) -> Self {
        self.current_user = Arc::new(resolver);
        self
    }

    async fn send(&self, op: InventoryOp) -> Result<OpOutcome, InventoryError> {
        self.inner.apply(op).await.map_err(Self::map_error)
    }

    /// Sets the quantity of every listed item in one store call.
    ///
    /// The log line counts the updates requested, not the items that matched.
    #[instrument(skip(self, updates), fields(requested = updates.len()))]
    pub async fn update_many_items(
        &self,
        updates: Vec<QuantityUpdate>,
    ) -> Result<BulkSummary, InventoryError> {
        debug!(?updates, "Sending request");
        match self.send(InventoryOp::UpdateManyItems(updates)).await? {
            OpOutcome::Bulk(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Removes every listed item in one store call.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn delete_many_items(&self, ids: Vec<RecordId>) -> Result<BulkSummary, InventoryError> {
        debug!(?ids, "Sending request");
        match self.send(InventoryOp::DeleteManyItems(ids)).await? {
            OpOutcome::Bulk(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Appends a free-form entry to the activity log.
    #[instrument(skip(self))]
    pub async fn add_log(&self, message: String) -> Result<ActivityLogEntry, InventoryError> {
        debug!("Sending request");
        match self.send(InventoryOp::AddLog(message)).await? {
            OpOutcome::Logged(entry) => Ok(entry),
            other => Err(unexpected(other)),
        }
    }

    /// The active operator, as decided by the configured [`CurrentUser`] resolver.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<Option<User>, InventoryError> {
        let inventory = self.snapshot().await?;
        Ok(self.current_user.resolve(&inventory).cloned())
    }
}

/// Generates `add_*`, `update_*`, `delete_*` and `get_*` for one collection.
macro_rules! collection_methods {
    ($($name:ident, $field:ident: $record:ident, $draft:ident;)*) => {
        paste! {
            impl InventoryClient {
                $(
                    #[doc = concat!("Adds a `", stringify!($record), "`; the store assigns its id.")]
                    #[instrument(skip(self, draft))]
                    pub async fn [<add_ $name>](&self, draft: $draft) -> Result<$record, InventoryError> {
                        debug!(?draft, "Sending request");
                        draft.validate()?;
                        match self.send(InventoryOp::[<Add $record>](draft)).await? {
                            OpOutcome::$record(Change::Created(record)) => Ok(record),
                            other => Err(unexpected(other)),
                        }
                    }

                    #[doc = concat!("Replaces the `", stringify!($record), "` with the same id.")]
                    #[instrument(skip(self, record))]
                    pub async fn [<update_ $name>](
                        &self,
                        record: $record,
                    ) -> Result<Change<$record>, InventoryError> {
                        debug!(?record, "Sending request");
                        record.validate()?;
                        match self.send(InventoryOp::[<Update $record>](record)).await? {
                            OpOutcome::$record(change) => Ok(change),
                            other => Err(unexpected(other)),
                        }
                    }

                    #[instrument(skip(self))]
                    pub async fn [<delete_ $name>](
                        &self,
                        id: RecordId,
                    ) -> Result<Change<$record>, InventoryError> {
                        debug!("Sending request");
                        match self.send(InventoryOp::[<Delete $record>](id)).await? {
                            OpOutcome::$record(change) => Ok(change),
                            other => Err(unexpected(other)),
                        }
                    }

                    pub async fn [<get_ $name>](
                        &self,
                        id: &RecordId,
                    ) -> Result<Option<$record>, InventoryError> {
                        Ok(self.snapshot().await?.$field.get(id).cloned())
                    }
                )*
            }
        }
    };
}

collection_methods! {
    item, items: Item, ItemDraft;
    category, categories: Category, CategoryDraft;
    supplier, suppliers: Supplier, SupplierDraft;
    order, orders: Order, OrderDraft;
    user, users: User, UserDraft;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, UserStatus};
    use snapshot_framework::mock::{create_mock_client, expect_apply, MockClient};

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_store() {
        let mock = MockClient::<Inventory>::new();
        let client = InventoryClient::new(mock.client());

        let result = client.add_category(CategoryDraft::new("  ")).await;
        assert!(matches!(result, Err(InventoryError::Validation(_))));

        let mut nameless = crate::inventory::seed::seed().users.first().unwrap().clone();
        nameless.full_name = String::new();
        let result = client.update_user(nameless).await;
        assert!(matches!(result, Err(InventoryError::Validation(_))));

        assert!(mock.received().is_empty());
    }

    #[tokio::test]
    async fn test_delete_sends_id_and_returns_change() {
        let (inner, mut receiver) = create_mock_client::<Inventory>(10);
        let client = InventoryClient::new(inner);

        let task = tokio::spawn(async move { client.delete_supplier(RecordId::from("s1")).await });

        let (op, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert!(matches!(op, InventoryOp::DeleteSupplier(ref id) if id.as_str() == "s1"));
        responder
            .send(Ok(OpOutcome::Supplier(Change::NotFound(RecordId::from(
                "s1",
            )))))
            .unwrap();

        let change = task.await.unwrap().unwrap();
        assert!(!change.is_applied());
    }

    #[tokio::test]
    async fn test_mismatched_outcome_is_reported() {
        let mut mock = MockClient::<Inventory>::new();
        mock.expect_apply()
            .return_ok(OpOutcome::Bulk(BulkSummary {
                requested: 1,
                applied: 1,
            }));
        let client = InventoryClient::new(mock.client());

        let result = client.add_log("hello".into()).await;

        assert!(matches!(result, Err(InventoryError::UnexpectedOutcome(_))));
    }

    #[tokio::test]
    async fn test_closed_store_maps_to_communication_error() {
        let mut mock = MockClient::<Inventory>::new();
        mock.expect_apply().return_err(FrameworkError::ActorClosed);
        let client = InventoryClient::new(mock.client());

        let result = client
            .update_many_items(vec![QuantityUpdate {
                id: RecordId::from("i1"),
                quantity: 2,
            }])
            .await;

        assert_eq!(
            result,
            Err(InventoryError::ActorCommunicationError("Actor closed".into()))
        );
    }

    struct ByEmail(&'static str);

    impl CurrentUser for ByEmail {
        fn resolve<'a>(&self, inventory: &'a Inventory) -> Option<&'a User> {
            inventory.users.iter().find(|u| u.email == self.0)
        }
    }

    #[tokio::test]
    async fn test_current_user_resolver_is_pluggable() {
        let mut inventory = crate::inventory::seed::seed();
        inventory.users.insert(UserDraft {
            full_name: "Siti".into(),
            email: "siti@example.com".into(),
            role: Role::Manager,
            status: UserStatus::Active,
            ..UserDraft::default()
        });

        let mut mock = MockClient::<Inventory>::new();
        mock.expect_read().return_ok(inventory.clone());
        mock.expect_read().return_ok(inventory);

        let default_client = InventoryClient::new(mock.client());
        let first = default_client.current_user().await.unwrap().unwrap();
        assert_eq!(first.full_name, "John Doe");

        let custom = default_client.with_current_user(ByEmail("siti@example.com"));
        let siti = custom.current_user().await.unwrap().unwrap();
        assert_eq!(siti.full_name, "Siti");
        mock.verify();
    }
}
