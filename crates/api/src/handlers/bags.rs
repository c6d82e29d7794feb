use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::{Html, Redirect},
    Form,
};

use bags::{NewBag, NewClub};

use crate::{
    forms::{AddClubForm, CreateBagForm},
    views, ApiError, AppState,
};

type IdPath = Result<Path<i64>, PathRejection>;

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let bags = state.store.list_bags().await?;
    Ok(Html(views::bag_list(&bags)))
}

pub async fn show(
    id: IdPath,
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let Path(id) = id?;
    let bag = state.store.get_bag(id).await?;
    Ok(Html(views::bag_detail(&bag)))
}

pub async fn new_form() -> Html<String> {
    Html(views::new_bag_form())
}

pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<CreateBagForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    let command = NewBag::try_from(form)?;

    let bag = state.store.insert_bag(command).await?;
    Ok(Redirect::to(&format!("/bags/{}", bag.id)))
}

pub async fn delete(
    id: IdPath,
    State(state): State<AppState>,
) -> Result<Redirect, ApiError> {
    let Path(id) = id?;
    state.store.delete_bag(id).await?;
    Ok(Redirect::to("/bags"))
}

pub async fn edit_form(
    id: IdPath,
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let Path(id) = id?;
    let bag = state.store.get_bag(id).await?;
    Ok(Html(views::edit_bag_form(&bag)))
}

pub async fn update(
    id: IdPath,
    State(state): State<AppState>,
    form: Result<Form<AddClubForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Path(id) = id?;
    let Form(form) = form?;
    let command = NewClub::try_from(form)?;

    state.store.append_club(id, command).await?;
    Ok(Redirect::to(&format!("/bags/{id}")))
}
