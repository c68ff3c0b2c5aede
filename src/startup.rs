use crate::configuration::Settings;
use crate::connectors;
use crate::routes;
use crate::services::SessionRegistry;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let registry = SessionRegistry::from_settings(&settings)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let registry = web::Data::new(registry);

    // upstream for /api/chatbot; the sessions use their own remote path
    let openai = web::Data::new(connectors::init_openai(&settings));

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(json_config.clone())
            .app_data(registry.clone())
            .app_data(openai.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(web::scope("/api").service(routes::chatbot::chatbot_handler))
            .service(
                web::scope("/chat")
                    .service(routes::chat::quick_actions_handler)
                    .service(routes::chat::item)
                    .service(routes::chat::send_handler)
                    .service(routes::chat::reset_handler)
                    .service(routes::chat::open_handler)
                    .service(routes::chat::close_handler)
                    .service(routes::chat::minimize_handler),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
