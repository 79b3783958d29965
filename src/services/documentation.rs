use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Pitchside Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::websocket::ws_handler,
        crate::routes::clock::start_timer,
        crate::routes::clock::stop_timer,
        crate::routes::clock::reset_timer,
        crate::routes::clock::set_timer,
        crate::routes::clock::set_timer_mode,
        crate::routes::overlay::set_extra_time,
        crate::routes::overlay::toggle_extra_time,
        crate::routes::overlay::toggle_scoreboard,
        crate::routes::overlay::toggle_players_list,
        crate::routes::overlay::toggle_game_report,
        crate::routes::overlay::toggle_match_info,
        crate::routes::match_doc::get_config,
        crate::routes::match_doc::set_score,
        crate::routes::match_doc::update_team_info,
        crate::routes::match_doc::update_customization,
        crate::routes::match_doc::add_player,
        crate::routes::match_doc::edit_player,
        crate::routes::match_doc::delete_player,
        crate::routes::match_doc::add_goal,
        crate::routes::match_doc::add_card,
        crate::routes::match_doc::toggle_player_field,
        crate::routes::match_doc::reset_team_stats,
        crate::routes::match_doc::export_match,
        crate::routes::match_doc::import_match,
        crate::routes::style::update_style,
        crate::routes::style::update_match_info,
        crate::routes::style::update_layout,
        crate::routes::style::export_style,
        crate::routes::style::import_style,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::requests::ActionResponse,
            crate::dto::requests::VisibilityResponse,
            crate::dto::requests::ExtraTimeResponse,
            crate::dto::requests::SetTimeRequest,
            crate::dto::requests::SetModeRequest,
            crate::dto::requests::SetExtraTimeRequest,
            crate::dto::requests::SetScoreRequest,
            crate::dto::requests::TeamInfoUpdate,
            crate::dto::requests::CustomizationUpdate,
            crate::dto::requests::PlayerUpsert,
            crate::dto::requests::AddGoalRequest,
            crate::dto::requests::AddCardRequest,
            crate::dto::requests::StyleUpdate,
            crate::dto::requests::MatchInfoUpdate,
            crate::dto::requests::LayoutUpdate,
            crate::dto::ws::ClockStatus,
            crate::dto::ws::OutboundMessage,
            crate::dao::documents::MatchDocument,
            crate::dao::documents::StyleDocument,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "timer", description = "Match clock controls"),
        (name = "overlay", description = "Overlay visibility and extra time"),
        (name = "match", description = "Scores, rosters and match events"),
        (name = "style", description = "Overlay styling and layout"),
        (name = "display", description = "WebSocket endpoint for display clients"),
    )
)]
pub struct ApiDoc;
