use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        self.client.request(method, &url)
    }

    fn check_status_code(
        &self,
        res: &Response,
        expected_status_codes: &[StatusCode],
    ) -> Result<(), APIError> {
        let status = res.status();
        if !expected_status_codes.contains(&status) {
            return Err(APIError::UnexpectedStatusCode(status));
        }
        Ok(())
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        self.check_status_code(&res, expected_status_codes)?;
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    async fn send<T: for<'de> Deserialize<'de>>(
        &self,
        req: RequestBuilder,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        let res = match req.send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_codes).await
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.get_client(Method::GET, path);
        self.send(req, &[expected_status_code]).await
    }

    pub async fn delete<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.get_client(Method::DELETE, path);
        self.send(req, &[expected_status_code]).await
    }

    pub async fn put<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.get_client(Method::PUT, path).json(&body);
        self.send(req, &[expected_status_code]).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        let req = self.get_client(Method::POST, path).json(&body);
        self.send(req, expected_status_codes).await
    }
}
