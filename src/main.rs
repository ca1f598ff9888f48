use rask_log_generator::generator::EMITTER_LOGGER;
use rask_log_generator::{Emitter, LogContext, Logger};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let logger = Logger::from_config(EMITTER_LOGGER);
    let ctx = LogContext::new().with_logger(logger);

    Emitter::new().run(&ctx).await;
}
