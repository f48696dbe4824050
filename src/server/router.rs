use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, FieldErrorDto},
        content::{GalleryImageDto, ServerContentDto, ServerFeatureDto, ServerRuleDto},
        news::{CreateNewsPostDto, NewsPostDto},
        screenshot::ScreenshotDto,
        stats::{DailyPlayerCountDto, MonthlyStatsDto, ServerStatsDto},
        status::ServerStatusDto,
    },
    server::{
        controller::{content, news, screenshot, stats, status},
        state::AppState,
    },
};

/// Screenshot uploads are capped at 5 MB.
const UPLOAD_SIZE_LIMIT: usize = 5 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        status::get_server_status,
        content::get_content,
        news::get_news,
        news::get_news_post,
        news::create_news,
        news::update_news,
        news::delete_news,
        screenshot::get_screenshots,
        screenshot::get_screenshot,
        screenshot::upload_screenshot,
        screenshot::delete_screenshot,
        stats::get_stats,
        stats::get_stats_activity,
        stats::get_stats_monthly,
    ),
    components(schemas(
        ServerStatusDto,
        ServerContentDto,
        ServerRuleDto,
        ServerFeatureDto,
        GalleryImageDto,
        NewsPostDto,
        CreateNewsPostDto,
        ScreenshotDto,
        ServerStatsDto,
        DailyPlayerCountDto,
        MonthlyStatsDto,
        ErrorDto,
        FieldErrorDto,
        DeleteResultDto,
    )),
    tags(
        (name = status::STATUS_TAG, description = "Live Minecraft server status"),
        (name = content::CONTENT_TAG, description = "Static site content"),
        (name = news::NEWS_TAG, description = "Community news posts"),
        (name = screenshot::SCREENSHOT_TAG, description = "Community screenshots"),
        (name = stats::STATS_TAG, description = "Server statistics and player activity"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/server-status", get(status::get_server_status))
        .route("/api/content", get(content::get_content))
        .route("/api/news", get(news::get_news).post(news::create_news))
        .route(
            "/api/news/{id}",
            get(news::get_news_post)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route(
            "/api/screenshots",
            get(screenshot::get_screenshots).post(screenshot::upload_screenshot),
        )
        .route(
            "/api/screenshots/{id}",
            get(screenshot::get_screenshot).delete(screenshot::delete_screenshot),
        )
        .route("/api/stats", get(stats::get_stats))
        .route("/api/stats/activity", get(stats::get_stats_activity))
        .route("/api/stats/monthly", get(stats::get_stats_monthly))
        .layer(DefaultBodyLimit::max(UPLOAD_SIZE_LIMIT))
}

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
