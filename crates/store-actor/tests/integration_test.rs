use async_trait::async_trait;
use serde::Serialize;
use store_actor::{
    FrameworkError, JsonSnapshotStore, ResourceActor, ResourceClient, StoreEntity,
};

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Shelf {
    code: String,
}

#[derive(Debug)]
struct ShelfCreate {
    code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Book {
    id: u32,
    title: String,
    shelf: String,
}

#[derive(Debug)]
struct BookCreate {
    title: String,
    shelf: String,
}

#[derive(Debug, thiserror::Error)]
enum LibraryError {
    #[error("empty code")]
    EmptyCode,
    #[error("unknown shelf {0}")]
    UnknownShelf(String),
    #[error("shelf lookup failed: {0}")]
    Lookup(String),
}

impl StoreEntity for Shelf {
    type Id = String;
    type Create = ShelfCreate;
    type Context = ();
    type Error = LibraryError;
    const TABLE: &'static str = "shelf";

    fn assign_id(params: &ShelfCreate, _next: u32) -> String {
        params.code.clone()
    }

    fn from_create_params(id: String, _params: ShelfCreate) -> Result<Self, LibraryError> {
        if id.is_empty() {
            return Err(LibraryError::EmptyCode);
        }
        Ok(Self { code: id })
    }
}

#[async_trait]
impl StoreEntity for Book {
    type Id = u32;
    type Create = BookCreate;
    type Context = ResourceClient<Shelf>;
    type Error = LibraryError;
    const TABLE: &'static str = "book";

    fn assign_id(_params: &BookCreate, next: u32) -> u32 {
        next
    }

    fn from_create_params(id: u32, params: BookCreate) -> Result<Self, LibraryError> {
        Ok(Self {
            id,
            title: params.title,
            shelf: params.shelf,
        })
    }

    async fn on_create(&mut self, shelves: &ResourceClient<Shelf>) -> Result<(), LibraryError> {
        match shelves.get(self.shelf.clone()).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(LibraryError::UnknownShelf(self.shelf.clone())),
            Err(e) => Err(LibraryError::Lookup(e.to_string())),
        }
    }
}

fn shelf(code: &str) -> ShelfCreate {
    ShelfCreate {
        code: code.to_string(),
    }
}

fn book(title: &str, shelf: &str) -> BookCreate {
    BookCreate {
        title: title.to_string(),
        shelf: shelf.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_create_get_query_count() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    let handle = tokio::spawn(actor.run(()));

    for code in ["B", "A", "C"] {
        client.create(shelf(code)).await.unwrap();
    }

    assert_eq!(client.count().await.unwrap(), 3);
    assert_eq!(
        client.get("A".to_string()).await.unwrap(),
        Some(Shelf { code: "A".into() })
    );
    assert!(client.get("Z".to_string()).await.unwrap().is_none());

    let all: Vec<String> = client.list().await.unwrap().into_iter().map(|s| s.code).collect();
    assert_eq!(all, vec!["A", "B", "C"]);

    let not_b = client.query(|s: &Shelf| s.code != "B").await.unwrap();
    assert_eq!(not_b.len(), 2);

    let none = client.query(|s: &Shelf| s.code == "Q").await.unwrap();
    assert!(none.is_empty());

    drop(client);
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_duplicate_key_is_rejected() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    client.create(shelf("A")).await.unwrap();
    let err = client.create(shelf("A")).await.unwrap_err();

    match err {
        FrameworkError::DuplicateKey { table, id } => {
            assert_eq!(table, "shelf");
            assert_eq!(id, "A");
        }
        other => panic!("Expected DuplicateKey, got {other:?}"),
    }
    assert_eq!(client.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_construction_error_is_boxed_and_nothing_stored() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(shelf("")).await.unwrap_err();
    let FrameworkError::EntityError(inner) = err else {
        panic!("Expected EntityError");
    };
    assert!(matches!(
        inner.downcast_ref::<LibraryError>(),
        Some(LibraryError::EmptyCode)
    ));
    assert_eq!(client.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_on_create_checks_reference_through_context() {
    let (shelf_actor, shelves) = ResourceActor::<Shelf>::new(10);
    let (book_actor, books) = ResourceActor::<Book>::new(10);
    let shelf_handle = tokio::spawn(shelf_actor.run(()));
    let book_handle = tokio::spawn(book_actor.run(shelves.clone()));

    shelves.create(shelf("S1")).await.unwrap();

    let first = books.create(book("Dune", "S1")).await.unwrap();
    assert_eq!(first, 1);

    let err = books.create(book("Emma", "S9")).await.unwrap_err();
    let FrameworkError::EntityError(inner) = err else {
        panic!("Expected EntityError");
    };
    assert!(matches!(
        inner.downcast_ref::<LibraryError>(),
        Some(LibraryError::UnknownShelf(code)) if code == "S9"
    ));

    // The rejected book did not consume a sequence number.
    let second = books.create(book("Ubik", "S1")).await.unwrap();
    assert_eq!(second, 2);
    assert_eq!(books.count().await.unwrap(), 2);

    // Book actor holds a shelf client in its context, so it must stop first.
    drop(books);
    book_handle.await.unwrap().unwrap();
    drop(shelves);
    shelf_handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    drop(actor);

    let err = client.create(shelf("A")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}

#[tokio::test]
async fn test_json_store_snapshot_written_on_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::<Shelf>::new(dir.path());
    let path = store.path().to_path_buf();

    let (actor, client) = ResourceActor::with_store(10, Box::new(store));
    let handle = tokio::spawn(actor.run(()));

    client.create(shelf("A")).await.unwrap();
    client.create(shelf("B")).await.unwrap();
    assert!(!path.exists());

    drop(client);
    handle.await.unwrap().unwrap();

    let rows: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(rows, serde_json::json!([{ "code": "A" }, { "code": "B" }]));
}
