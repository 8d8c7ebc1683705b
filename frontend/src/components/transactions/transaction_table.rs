use shared::Transaction;
use yew::prelude::*;

use crate::services::date_utils::format_sale_date;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
}

/// Text shown in the "Sold" column
pub fn sold_label(sold: bool) -> &'static str {
    if sold {
        "Yes"
    } else {
        "No"
    }
}

/// Cell text for one row, in column order
pub fn row_cells(transaction: &Transaction) -> [String; 6] {
    [
        transaction.title.clone(),
        transaction.description.clone(),
        transaction.price.to_string(),
        transaction.category.clone(),
        format_sale_date(&transaction.date_of_sale),
        sold_label(transaction.sold).to_string(),
    ]
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-table">
            <h2>{"Transactions"}</h2>

            {if props.loading {
                html! { <p class="loading">{"Loading..."}</p> }
            } else {
                html! {
                    <table>
                        <thead>
                            <tr>
                                <th>{"Title"}</th>
                                <th>{"Description"}</th>
                                <th>{"Price"}</th>
                                <th>{"Category"}</th>
                                <th>{"Date of Sale"}</th>
                                <th>{"Sold"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for props.transactions.iter().map(|transaction| html! {
                                <tr key={transaction.id.clone()}>
                                    {for row_cells(transaction).into_iter().map(|cell| html! { <td>{cell}</td> })}
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sold_label() {
        assert_eq!(sold_label(true), "Yes");
        assert_eq!(sold_label(false), "No");
    }

    #[test]
    fn test_row_cells_follow_column_order() {
        let transaction: Transaction = serde_json::from_value(serde_json::json!({
            "_id": 7,
            "title": "White Gold Plated Princess",
            "description": "Classic created wedding engagement ring",
            "price": 100,
            "category": "jewelery",
            "dateOfSale": "2022-07-27T20:29:54+05:30",
            "sold": false
        }))
        .unwrap();

        assert_eq!(
            row_cells(&transaction),
            [
                "White Gold Plated Princess".to_string(),
                "Classic created wedding engagement ring".to_string(),
                "100".to_string(),
                "jewelery".to_string(),
                "7/27/2022".to_string(),
                "No".to_string(),
            ]
        );
    }
}
