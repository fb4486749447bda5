//! Route definitions for one record kind.

use axum::routing::MethodRouter;
use axum::{Extension, Router};
use shelter_core::kind::{Operation, OperationSet, RecordKind};

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/{kind}`, limited to the enabled operations.
///
/// ```text
/// GET    /       -> list     (Operation::List)
/// POST   /       -> create   (Operation::Create)
/// GET    /{id}   -> get      (Operation::Get)
/// PUT    /{id}   -> replace  (Operation::Replace)
/// DELETE /{id}   -> delete   (Operation::Delete)
/// ```
///
/// A path whose methods are all disabled is not mounted; a disabled method on
/// a mounted path answers 405.
pub fn router(kind: RecordKind, operations: OperationSet) -> Router<AppState> {
    let mut collection: MethodRouter<AppState> = MethodRouter::new();
    if operations.contains(Operation::List) {
        collection = collection.get(records::list);
    }
    if operations.contains(Operation::Create) {
        collection = collection.post(records::create);
    }

    let mut item: MethodRouter<AppState> = MethodRouter::new();
    if operations.contains(Operation::Get) {
        item = item.get(records::get_by_id);
    }
    if operations.contains(Operation::Replace) {
        item = item.put(records::replace);
    }
    if operations.contains(Operation::Delete) {
        item = item.delete(records::delete);
    }

    let mut router = Router::new();
    if operations.contains(Operation::List) || operations.contains(Operation::Create) {
        router = router.route("/", collection);
    }
    if operations.contains(Operation::Get)
        || operations.contains(Operation::Replace)
        || operations.contains(Operation::Delete)
    {
        router = router.route("/{id}", item);
    }

    router.layer(Extension(kind))
}
