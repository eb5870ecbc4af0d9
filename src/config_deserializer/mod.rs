mod seismic_event_deserializer;
mod station_deserializer;
mod velocity_model_deserializer;
