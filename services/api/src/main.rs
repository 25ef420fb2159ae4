use housing_desk_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("housing-desk-api: {err}");
        std::process::exit(1);
    }
}
