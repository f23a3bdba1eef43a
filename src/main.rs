use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use paged_users::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    services::UserService,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // DatabaseConnection 不一定实现 Clone，只在闭包外构造一次
    let user_service = web::Data::new(UserService::new(pool));
    let pager_config = config.pager.clone();

    log::info!(
        "Starting HTTP server at {}:{} ({} users per page)",
        config.server.host,
        config.server.port,
        pager_config.per_page
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(web::Data::new(pager_config.clone()))
            .configure(swagger_config)
            .configure(handlers::user_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
