//! Read-only table of every stored booking.
use crate::models::booking::Booking;
use leptos::*;

#[component]
pub fn BookingsTable(bookings: Vec<Booking>) -> impl IntoView {
    let empty = bookings.is_empty();

    view! {
        <div class="bookings bg-card rounded-xl shadow-sm overflow-hidden">
            <div class="p-4 md:p-6 border-b border-border">
                <h3 class="font-display text-xl">"All Bookings"</h3>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-secondary">
                        <tr>
                            <th>"ID"</th>
                            <th>"Guest"</th>
                            <th class="hidden md:table-cell">"Room"</th>
                            <th class="hidden lg:table-cell">"Dates"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {bookings
                            .into_iter()
                            .map(|booking| {
                                view! {
                                    <tr class="booking-row">
                                        <td class="font-mono">{booking.id.to_string()}</td>
                                        <td>{booking.user_name.clone()}</td>
                                        <td class="hidden md:table-cell">{booking.room_name.clone()}</td>
                                        <td class="hidden lg:table-cell">
                                            {format!("{} - {}", booking.check_in, booking.check_out)}
                                        </td>
                                        <td class="text-accent">{format!("${}", booking.amount())}</td>
                                        <td>
                                            <span class="status px-2 py-1 text-xs rounded-full">
                                                {booking.status.clone()}
                                            </span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                        {empty
                            .then(|| {
                                view! {
                                    <tr>
                                        <td colspan="6" class="empty px-6 py-8 text-center text-muted-foreground">
                                            "No bookings yet"
                                        </td>
                                    </tr>
                                }
                            })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
