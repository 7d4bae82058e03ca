use carlot_api_types::{SaleRecord, SaleRecordForm};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::entity::sale;

impl From<sale::Model> for SaleRecord {
    fn from(value: sale::Model) -> Self {
        let sale::Model {
            id,
            date,
            salesperson,
            customer_name,
            car_make,
            car_model,
            car_year,
            sale_price,
            commission_rate,
            commission_earned,
        } = value;
        SaleRecord {
            id,
            date,
            salesperson,
            customer_name,
            car_make,
            car_model,
            car_year,
            sale_price,
            commission_rate,
            commission_earned,
        }
    }
}

pub(crate) fn form_to_active_model(form: SaleRecordForm) -> sale::ActiveModel {
    let SaleRecordForm {
        date,
        salesperson,
        customer_name,
        car_make,
        car_model,
        car_year,
        sale_price,
        commission_rate,
        commission_earned,
    } = form;
    sale::ActiveModel {
        id: NotSet,
        date: Set(date),
        salesperson: Set(salesperson),
        customer_name: Set(customer_name),
        car_make: Set(car_make),
        car_model: Set(car_model),
        car_year: Set(car_year),
        sale_price: Set(sale_price),
        commission_rate: Set(commission_rate),
        commission_earned: Set(commission_earned),
    }
}
