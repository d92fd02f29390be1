//! Stock and products service access.

use async_trait::async_trait;
use rocket_commerce::{Product, ProductId, Stock};
use rocket_data::{FetchClient, FetchError};

/// Remote catalog consulted by the cart store.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Available stock for a product (`GET /stock/{id}`).
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError>;

    /// Product metadata (`GET /products/{id}`).
    async fn product(&self, product_id: ProductId) -> Result<Product, FetchError>;

    /// Full product listing (`GET /products`).
    async fn products(&self) -> Result<Vec<Product>, FetchError>;
}

#[async_trait]
impl<C: CatalogApi + ?Sized> CatalogApi for std::sync::Arc<C> {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError> {
        (**self).stock(product_id).await
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, FetchError> {
        (**self).product(product_id).await
    }

    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        (**self).products().await
    }
}

/// [`CatalogApi`] over the storefront's JSON HTTP services.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: FetchClient,
}

impl HttpCatalog {
    /// Create a catalog client. `client` should carry the service base URL.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: String) -> Result<T, FetchError> {
        self.client
            .get(path)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError> {
        self.get_json(format!("/stock/{}", product_id)).await
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, FetchError> {
        self.get_json(format!("/products/{}", product_id)).await
    }

    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("/products".to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;

    type Route = (&'static str, u16, &'static str);

    /// Serve canned JSON responses on a local port, one connection at a time.
    /// Returns the base URL and the request paths seen so far.
    async fn serve(routes: Vec<Route>) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let (read, mut write) = socket.into_split();
                let mut lines = BufReader::new(read).lines();
                let request_line = lines.next_line().await.unwrap().unwrap_or_default();
                while let Ok(Some(line)) = lines.next_line().await {
                    if line.is_empty() {
                        break;
                    }
                }

                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| *route == path)
                    .map(|&(_, status, body)| (status, body))
                    .unwrap_or((404, "{}"));
                log.lock().unwrap().push(path);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status == 200 { "OK" } else { "Not Found" },
                    body.len(),
                    body
                );
                write.write_all(response.as_bytes()).await.unwrap();
                let _ = write.shutdown().await;
            }
        });

        (base_url, seen)
    }

    const SNEAKER: &str = r#"{"id":1,"title":"Tênis de Caminhada Leve Confortável","price":179.9,"image":"https://cdn.example.com/1.jpg"}"#;

    const SNEAKERS: &str = r#"[
        {"id":1,"title":"Tênis de Caminhada Leve Confortável","price":179.9,"image":"https://cdn.example.com/1.jpg"},
        {"id":2,"title":"Tênis VR Caminhada Confortável","price":139.9,"image":"https://cdn.example.com/2.jpg"}
    ]"#;

    #[tokio::test]
    async fn test_stock_and_product_paths() {
        let (base_url, seen) = serve(vec![
            ("/stock/1", 200, r#"{"id":1,"amount":3}"#),
            ("/products/1", 200, SNEAKER),
        ])
        .await;
        let catalog = HttpCatalog::new(FetchClient::new().with_base_url(base_url));

        let stock = catalog.stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock.amount, 3);

        let product = catalog.product(ProductId::new(1)).await.unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Tênis de Caminhada Leve Confortável");
        assert_eq!(product.price, 179.9);

        assert_eq!(*seen.lock().unwrap(), vec!["/stock/1", "/products/1"]);
    }

    #[tokio::test]
    async fn test_products_listing() {
        let (base_url, _) = serve(vec![("/products", 200, SNEAKERS)]).await;
        let catalog = HttpCatalog::new(FetchClient::new().with_base_url(base_url));

        let products = catalog.products().await.unwrap();
        let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(2)]);
    }

    #[tokio::test]
    async fn test_missing_stock_is_http_error() {
        let (base_url, seen) = serve(Vec::new()).await;
        let catalog = HttpCatalog::new(FetchClient::new().with_base_url(base_url));

        match catalog.stock(ProductId::new(42)).await.unwrap_err() {
            FetchError::HttpError { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(*seen.lock().unwrap(), vec!["/stock/42"]);
    }

    #[tokio::test]
    async fn test_malformed_stock_body_is_parse_error() {
        let (base_url, _) = serve(vec![("/stock/1", 200, r#"{"available":3}"#)]).await;
        let catalog = HttpCatalog::new(FetchClient::new().with_base_url(base_url));

        assert!(matches!(
            catalog.stock(ProductId::new(1)).await,
            Err(FetchError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        let catalog = HttpCatalog::new(FetchClient::new().with_base_url("http://127.0.0.1:1"));
        assert!(catalog.stock(ProductId::new(1)).await.is_err());
        assert!(catalog.product(ProductId::new(1)).await.is_err());
    }
}
