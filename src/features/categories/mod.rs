//! Category CRUD feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/categories` | Create a category |
//! | GET | `/api/categories` | List all categories |
//! | GET | `/api/categories/{id}` | Get a category |
//! | PUT | `/api/categories/{id}` | Replace a category |
//! | DELETE | `/api/categories/{id}` | Delete a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
