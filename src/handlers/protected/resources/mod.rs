// handlers/protected/resources/mod.rs - Owner-scoped CRUD for tasks, habits and notes
//
// The handlers are generic over `Resource`; routing instantiates them once
// per table, e.g. `get(collection::list::<Task>)`.

pub mod collection;
pub mod record;
