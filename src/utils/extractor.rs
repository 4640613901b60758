//! 路径参数安全提取器
//!
//! 路径中的 ID / 视角解析失败时返回统一的 ApiResponse 错误体，
//! 避免 actix 默认的 404/400 纯文本。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload};

use crate::models::grid::entities::ViewMode;
use crate::models::{ApiResponse, ErrorCode};

/// 路径参数解析错误，渲染为统一错误体
#[derive(Debug)]
pub struct PathParamError {
    message: String,
}

impl std::fmt::Display for PathParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for PathParamError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            &self.message,
        ))
    }
}

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = PathParamError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok());
                ready(match parsed {
                    Some(id) if id > 0 => Ok($name(id)),
                    _ => Err(PathParamError {
                        message: format!(
                            "Path parameter '{}' must be a positive integer",
                            $param
                        ),
                    }),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeLessonIdI64, "lesson_id");
define_safe_i64_extractor!(SafeGridTargetIdI64, "id");

/// 网格视角路径段提取器
pub struct SafeViewMode(pub ViewMode);

impl FromRequest for SafeViewMode {
    type Error = PathParamError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("view")
            .and_then(|raw| raw.parse::<ViewMode>().ok());
        ready(match parsed {
            Some(view) => Ok(SafeViewMode(view)),
            None => Err(PathParamError {
                message: "Path parameter 'view' must be one of: class, teacher, room".to_string(),
            }),
        })
    }
}
