use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::QuoteSubmitter;
use crate::forms::quote::QuoteForm;
use crate::models::visitor::Visitor;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, ServiceResult, quote as quote_service};
use crate::state::QuoteSearch;
use crate::store::VisitorStore;

#[get("/")]
pub async fn show_index(
    visitor: Visitor,
    store: web::Data<VisitorStore<QuoteSearch>>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = quote_service::load_quote_page(store.get_ref(), visitor.id());

    let mut context = base_context(&flash_messages, "index");
    context.insert("page", &data);

    render_template(&tera, "main/index.html", &context)
}

#[post("/quote")]
pub async fn submit_quote(
    visitor: Visitor,
    store: web::Data<VisitorStore<QuoteSearch>>,
    submitter: web::Data<dyn QuoteSubmitter>,
    web::Form(form): web::Form<QuoteForm>,
) -> impl Responder {
    match quote_service::submit_quote(submitter.get_ref(), store.get_ref(), visitor.id(), form)
        .await
    {
        Ok(()) => {}
        Err(ServiceError::Busy) => {
            FlashMessage::warning(ServiceError::Busy.to_string()).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Submission(err)) => {
            FlashMessage::error(format!("Could not get a quote: {err}")).send();
        }
    }
    redirect("/")
}

#[post("/quote/larger")]
pub async fn page_larger(
    visitor: Visitor,
    store: web::Data<VisitorStore<QuoteSearch>>,
) -> impl Responder {
    flash_paging_result(quote_service::page_larger(store.get_ref(), visitor.id()));
    redirect("/")
}

#[post("/quote/smaller")]
pub async fn page_smaller(
    visitor: Visitor,
    store: web::Data<VisitorStore<QuoteSearch>>,
) -> impl Responder {
    flash_paging_result(quote_service::page_smaller(store.get_ref(), visitor.id()));
    redirect("/")
}

fn flash_paging_result(result: ServiceResult<bool>) {
    if let Err(err) = result {
        FlashMessage::warning(err.to_string()).send();
    }
}
