use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ConsoleDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct GameDoc { pub id: i32, pub title: String, pub console_id: i32 }

#[derive(ToSchema)]
pub struct CreateConsoleRequest { pub name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateGameRequest { pub title: String, pub console_id: i64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::consoles::list,
        crate::routes::consoles::get,
        crate::routes::consoles::create,
        crate::routes::games::list,
        crate::routes::games::get,
        crate::routes::games::create,
    ),
    components(
        schemas(
            HealthResponse,
            ConsoleDoc,
            GameDoc,
            CreateConsoleRequest,
            CreateGameRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "consoles"),
        (name = "games")
    )
)]
pub struct ApiDoc;
