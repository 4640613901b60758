//! HTTP 参数反序列化错误的统一处理
//!
//! JSON 体与查询串解析失败时返回统一的 ApiResponse 错误体，
//! 而不是 actix 默认的纯文本。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid JSON body: {err}");
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidParameter,
        &message,
    ));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidParameter,
        &message,
    ));
    InternalError::from_response(err, response).into()
}
