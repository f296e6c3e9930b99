use serde::{Deserialize, Serialize};
use snapshot_framework::mock::FailingSlot;
use snapshot_framework::{
    Applied, Change, Collection, FileSlot, MemorySlot, Record, RecordId, SnapshotActor,
    SnapshotSlot, SnapshotState,
};

// --- Test State ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Shelf {
    id: RecordId,
    label: String,
    boxes: u32,
}

#[derive(Debug)]
struct ShelfDraft {
    label: String,
}

impl Record for Shelf {
    type Draft = ShelfDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: ShelfDraft) -> Self {
        Self {
            id,
            label: draft.label,
            boxes: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Room {
    shelves: Collection<Shelf>,
    journal: Vec<String>,
}

#[derive(Debug)]
enum RoomOp {
    Add(ShelfDraft),
    Update(Shelf),
    Delete(RecordId),
}

impl SnapshotState for Room {
    type Op = RoomOp;
    type Outcome = Change<Shelf>;
    type Event = String;

    fn seed() -> Self {
        Self {
            shelves: Collection::new(),
            journal: vec!["seeded".into()],
        }
    }

    fn apply(&mut self, op: RoomOp) -> Applied<Change<Shelf>, String> {
        let change = match op {
            RoomOp::Add(draft) => Change::Created(self.shelves.insert(draft)),
            RoomOp::Update(shelf) => self.shelves.replace(shelf),
            RoomOp::Delete(id) => self.shelves.remove(&id),
        };
        match change.record() {
            Some(shelf) => {
                let line = format!("{} ({})", shelf.label, shelf.boxes);
                self.journal.insert(0, line.clone());
                Applied::changed(change, line)
            }
            None => Applied::untouched(change),
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let slot = MemorySlot::new("ROOM");
    let (actor, client) = SnapshotActor::<Room>::new(10, slot.clone(), 16);
    assert_eq!(actor.state().journal, vec!["seeded".to_string()]);
    let handle = tokio::spawn(actor.run());

    // 1. Create
    let created = client
        .apply(RoomOp::Add(ShelfDraft { label: "A1".into() }))
        .await
        .unwrap();
    let shelf = created.record().unwrap().clone();
    assert!(!shelf.id.is_empty());

    // 2. Update
    let mut edited = shelf.clone();
    edited.boxes = 4;
    let updated = client.apply(RoomOp::Update(edited.clone())).await.unwrap();
    assert!(matches!(updated, Change::Updated { ref previous, .. } if previous.boxes == 0));

    // 3. Unknown id leaves the journal alone
    let ghost = client
        .apply(RoomOp::Delete(RecordId::from("nope")))
        .await
        .unwrap();
    assert_eq!(ghost, Change::NotFound(RecordId::from("nope")));

    // 4. Delete
    let deleted = client.apply(RoomOp::Delete(shelf.id.clone())).await.unwrap();
    assert!(matches!(deleted, Change::Deleted(_)));

    let room = client.snapshot().await.unwrap();
    assert!(room.shelves.is_empty());
    assert_eq!(room.journal, vec!["A1 (4)", "A1 (4)", "A1 (0)", "seeded"]);

    // Persisted snapshot matches the in-memory one
    let persisted: Room = serde_json::from_str(&slot.read().unwrap().unwrap()).unwrap();
    assert_eq!(persisted, room);

    // Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_notices_carry_increasing_revisions() {
    let (actor, client) = SnapshotActor::<Room>::new(10, MemorySlot::new("ROOM"), 16);
    tokio::spawn(actor.run());
    let mut notices = client.subscribe().await.unwrap();

    client
        .apply(RoomOp::Add(ShelfDraft { label: "B1".into() }))
        .await
        .unwrap();
    client
        .apply(RoomOp::Delete(RecordId::from("missing")))
        .await
        .unwrap();
    client
        .apply(RoomOp::Add(ShelfDraft { label: "B2".into() }))
        .await
        .unwrap();

    let first = notices.recv().await.unwrap();
    let second = notices.recv().await.unwrap();
    assert_eq!((first.revision, first.event.as_str()), (1, "B1 (0)"));
    assert_eq!((second.revision, second.event.as_str()), (2, "B2 (0)"));
    assert!(notices.try_recv().is_err());
}

#[tokio::test]
async fn test_file_slot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let (actor, client) = SnapshotActor::<Room>::new(10, FileSlot::new(dir.path(), "ROOM"), 16);
    let handle = tokio::spawn(actor.run());
    client
        .apply(RoomOp::Add(ShelfDraft { label: "C1".into() }))
        .await
        .unwrap();
    let before = client.snapshot().await.unwrap();
    drop(client);
    handle.await.unwrap();

    let (actor, _client) = SnapshotActor::<Room>::new(10, FileSlot::new(dir.path(), "ROOM"), 16);
    assert_eq!(actor.state(), &before);
}

/// File I/O steps off the worker on a multi-thread runtime; the actor must keep
/// answering while it does.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_file_slot_on_multi_thread_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let slot = FileSlot::new(dir.path(), "ROOM");
    let (actor, client) = SnapshotActor::<Room>::new(10, slot.clone(), 16);
    let handle = tokio::spawn(actor.run());

    for label in ["E1", "E2", "E3"] {
        client
            .apply(RoomOp::Add(ShelfDraft { label: label.into() }))
            .await
            .unwrap();
    }
    let room = client.snapshot().await.unwrap();
    drop(client);
    handle.await.unwrap();

    let persisted: Room = serde_json::from_str(&slot.read().unwrap().unwrap()).unwrap();
    assert_eq!(persisted, room);
    assert_eq!(persisted.shelves.len(), 3);
}

#[tokio::test]
async fn test_corrupt_slot_falls_back_to_seed() {
    let slot = MemorySlot::with_contents("ROOM", "{ definitely not json");
    let (actor, client) = SnapshotActor::<Room>::new(10, slot.clone(), 16);
    assert_eq!(actor.state(), &Room::seed());
    tokio::spawn(actor.run());

    // The seed replaces the garbage once the actor starts
    let room = client.snapshot().await.unwrap();
    let persisted: Room = serde_json::from_str(&slot.read().unwrap().unwrap()).unwrap();
    assert_eq!(persisted, room);
}

#[tokio::test]
async fn test_write_failures_keep_serving_from_memory() {
    let (actor, client) = SnapshotActor::<Room>::new(10, FailingSlot, 16);
    tokio::spawn(actor.run());

    let created = client
        .apply(RoomOp::Add(ShelfDraft { label: "D1".into() }))
        .await
        .unwrap();
    assert!(created.is_applied());
    assert_eq!(client.snapshot().await.unwrap().shelves.len(), 1);
}
