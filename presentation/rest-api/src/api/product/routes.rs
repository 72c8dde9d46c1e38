use std::sync::Arc;

use poem::{Body, Request};
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_mine::{GetMyProductsParams, GetMyProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse};
use crate::api::product::dto::{ProductFields, ProductResponse};
use crate::api::product::error_mapper::ProductOperation;
use crate::api::security::IdentityProvider;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    identity: Arc<dyn IdentityProvider>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_mine_use_case: Arc<dyn GetMyProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_mine_use_case: Arc<dyn GetMyProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            identity,
            get_all_use_case,
            get_mine_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }

    /// Shared by the PUT and PATCH routes.
    async fn update(
        &self,
        req: &Request,
        id: String,
        body: Body,
    ) -> UpdateProductResponse {
        let Some(user_id) = self.identity.resolve(req).await else {
            return UpdateProductResponse::Unauthorized(ErrorResponse::unauthorized());
        };

        let (title, description, image_url) = ProductFields::read(body).await.into_inputs();
        let params = UpdateProductParams {
            id: ProductId::new(id),
            user_id,
            title,
            description,
            image_url,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(ProductOperation::Update);
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }
}

/// Product catalog API
///
/// Anyone may browse products; creating, editing and deleting require a
/// Firebase ID token, and only the owner may edit or delete a product.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product, newest first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response(ProductOperation::GetAll);
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// List my products
    ///
    /// Returns the products owned by the authenticated caller.
    #[oai(path = "/products/me", method = "get", tag = "ApiTags::Products")]
    async fn get_my_products(&self, req: &Request) -> GetMyProductsResponse {
        let Some(user_id) = self.identity.resolve(req).await else {
            return GetMyProductsResponse::Unauthorized(ErrorResponse::unauthorized());
        };

        match self
            .get_mine_use_case
            .execute(GetMyProductsParams { user_id })
            .await
        {
            Ok(products) => GetMyProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response(ProductOperation::GetMine);
                GetMyProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(ProductOperation::GetById);
                match status.as_u16() {
                    400 => GetProductByIdResponse::BadRequest(json),
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// JSON body with `title`, `description` and `imageUrl`, all required.
    /// The caller becomes the owner.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        req: &Request,
        body: Body,
    ) -> CreateProductResponse {
        let Some(user_id) = self.identity.resolve(req).await else {
            return CreateProductResponse::Unauthorized(ErrorResponse::unauthorized());
        };

        let (title, description, image_url) = ProductFields::read(body).await.into_inputs();
        let params = CreateProductParams {
            user_id,
            title,
            description,
            image_url,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(ProductOperation::Create);
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace fields of a product
    ///
    /// JSON body with any of `title`, `description` and `imageUrl`; only the
    /// supplied fields change. Owner only.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn put_product(
        &self,
        req: &Request,
        id: Path<String>,
        body: Body,
    ) -> UpdateProductResponse {
        self.update(req, id.0, body).await
    }

    /// Patch a product
    ///
    /// Same semantics as PUT.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn patch_product(
        &self,
        req: &Request,
        id: Path<String>,
        body: Body,
    ) -> UpdateProductResponse {
        self.update(req, id.0, body).await
    }

    /// Delete a product
    ///
    /// Permanently removes a product. Owner only.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, req: &Request, id: Path<String>) -> DeleteProductResponse {
        let Some(user_id) = self.identity.resolve(req).await else {
            return DeleteProductResponse::Unauthorized(ErrorResponse::unauthorized());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
                user_id,
            })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageResponse {
                message: "Product deleted successfully".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response(ProductOperation::Delete);
                match status.as_u16() {
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMyProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
