use actix_web::{web, HttpResponse};

use crate::{
    context::ApiRestCtx,
    model::marks::{LookupMarksReqQuery, LookupMarksResJson},
};

pub fn marks_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/api", web::get().to(lookup));
}

async fn lookup(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<LookupMarksReqQuery>,
) -> HttpResponse {
    let marks = ctx.dataset().lookup(query.names());

    mb_log::debug(
        None,
        format!(
            "[ApiRestServer] Matched {} of {} requested name(s)",
            marks.len(),
            query.names().count()
        ),
    );

    HttpResponse::Ok().json(LookupMarksResJson::new(marks))
}
