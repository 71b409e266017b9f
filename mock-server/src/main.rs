use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let username = std::env::var("API_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("API_PASSWORD").unwrap_or_else(|_| "secret".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run(listener, &username, &password).await
}
