// handlers/article/mod.rs - Article CRUD handlers

pub mod create; // POST /articles
pub mod delete; // DELETE /articles/:article_id
pub mod list; // GET /articles
pub mod show; // GET /articles/:article_id
pub mod update; // PUT /articles/:article_id

pub use create::article_create;
pub use delete::article_delete;
pub use list::article_list;
pub use show::article_show;
pub use update::article_update;
