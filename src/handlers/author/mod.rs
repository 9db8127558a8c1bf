// handlers/author/mod.rs - Author CRUD handlers
//
// Each handler validates its input, makes one AuthorService call and maps
// the outcome onto the response envelope or an ApiError.

pub mod create; // POST /authors
pub mod delete; // DELETE /authors/:author_id
pub mod list; // GET /authors
pub mod show; // GET /authors/:author_id
pub mod update; // PUT /authors/:author_id

pub use create::author_create;
pub use delete::author_delete;
pub use list::author_list;
pub use show::author_show;
pub use update::author_update;
